/// Confirmation dialogs. At most one is open at a time and it blocks every
/// other command until it is answered.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Dialog {
    Selection,
    Clear,
}
