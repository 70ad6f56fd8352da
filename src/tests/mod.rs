mod models_tests;
mod patch_tests;
