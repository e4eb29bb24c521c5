// Job draft edit buffer: load a stored job, merge pasted JDs into it,
// validate and produce the canonical save payload.

pub mod draft;
pub mod handlers;
pub mod validation;
