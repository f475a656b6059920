pub mod chromatic;
