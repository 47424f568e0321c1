pub mod period_utils;
