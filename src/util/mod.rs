//----------------------------------------
// util mod
//----------------------------------------
pub mod root_find;
