//! In-process stand-in for the authentication service
//!
//! Used by the crate's own tests to exercise every case against a server
//! whose behaviour is known, including misbehaving variants.

pub mod pages;
pub mod setup;
pub mod stub;

pub use stub::{Behaviour, Fault, StubServer};

/// Start a stub server and build a quiet runner pointed at it.
///
/// `stub!()` uses the conforming behaviour, `stub!(behaviour)` a custom one.
#[macro_export]
macro_rules! stub {
    () => {
        $crate::stub!($crate::testing::Behaviour::default())
    };
    ($behaviour:expr) => {{
        let server = $crate::testing::StubServer::start($behaviour)
            .await
            .expect("Failed to start stub server");
        let runner = $crate::runner::Runner::new(server.config()).quiet();

        (runner, server)
    }};
}
