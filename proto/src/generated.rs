#![allow(clippy::doc_markdown, clippy::use_self)]
pub mod google {
    pub mod api {
        include!("generated/google.api.rs");
    }
    pub mod logging {
        pub mod r#type {
            include!("generated/google.logging.type.rs");
        }
        pub mod v2 {
            include!("generated/google.logging.v2.rs");
        }
    }
}
