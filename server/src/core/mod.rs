pub mod app;

// vim: ts=4
