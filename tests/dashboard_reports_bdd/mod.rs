//! Support code for the dashboard report behavioural tests.

mod state;

pub(crate) use state::{DashboardState, DashboardView, mount_dataset, parse_endpoint, run_view};
