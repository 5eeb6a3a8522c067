pub mod category_filter;
pub mod click_target;
pub mod commands;
pub mod control_state;
pub mod health_status;
pub mod region;
pub mod report_category;
pub mod report_list_view;
pub mod tab;
