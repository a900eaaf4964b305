//! Shared test harness modules for the offline regions CLI.

use super::*;

mod helpers;
