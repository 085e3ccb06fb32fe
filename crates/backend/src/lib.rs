pub mod api;
pub mod dashboards;
pub mod domain;
pub mod routes;
pub mod shared;
