pub mod load_report_use_case;
pub mod ports;
