//! `test-utils` is used for testing in both `linkmend-lib` and `linkmend`.
//! This crate does not depend on `linkmend-lib` or `linkmend`, else we would
//! get dependency cycles. Macros are used instead, so that the importer is
//! responsible for providing the dependencies.

mod dir_builder;

pub use dir_builder::DirBuilder;

/// Gets the "main" binary name (e.g. `linkmend`)
#[macro_export]
macro_rules! main_command {
    () => {
        assert_cmd::Command::cargo_bin(env!("CARGO_PKG_NAME"))
            .expect("Couldn't get cargo package name")
    };
}
