// src/lib.rs
//! `workshop-trigger`: fires synthetic Kubernetes incidents at the PagerDuty
//! Events API v2 so trainees can practise incident response.
//!
//! Layout:
//! - `domain`: wire and state types, error taxonomy.
//! - `repository`: scenario catalog, trigger history, local key/value state.
//! - `service`: payload builder and incident dispatcher.
//! - `adapter`: the HTTP transport for PagerDuty.
//! - `usecase`: front-end facing flows (routing key, theme, trigger).

pub mod adapter {
    pub mod pagerduty {
        pub mod events_client;
    }
}

pub mod config {
    pub mod app_config;
}

pub mod domain {
    pub mod error;
    pub mod model {
        pub mod event;
        pub mod history;
        pub mod scenario;
        pub mod severity;
        pub mod theme;
    }
}

pub mod repository {
    pub mod kv_store;
    pub mod local_state;
    pub mod scenario_catalog;
    pub mod trigger_history;
}

pub mod service {
    pub mod incident_dispatcher;
    pub mod payload_builder;
}

pub mod telemetry {
    pub mod tracing;
}

pub mod usecase {
    pub mod configure_routing_key;
    pub mod toggle_theme;
    pub mod trigger_incident;
}
