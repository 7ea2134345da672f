pub mod polar;
