// Profile, skills, endorsements, reputation and current jobs for one address.
// Every route here sits behind the wallet gate.

pub mod gate;
pub mod handlers;
