// Application tracking: every tailoring run is stored so it can be listed,
// previewed again or deleted.

pub mod handlers;
