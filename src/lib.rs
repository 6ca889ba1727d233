pub mod modules {
    pub mod events {
        pub mod core {
            pub mod event;
            pub mod event_store;
        }
        pub mod use_cases {
            pub mod list_events {
                pub mod handler;
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
            }
        }
        pub mod adapters {
            pub mod outbound {
                pub mod event_source;
                pub mod event_source_embedded;
                pub mod event_source_json_file;
            }
        }
    }
}

pub mod shell;
