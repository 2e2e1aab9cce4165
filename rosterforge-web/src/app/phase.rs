/// Top-level UI phase: which surface the user is on.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Login,
    Roster,
    Teams,
}
