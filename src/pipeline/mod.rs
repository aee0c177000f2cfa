pub mod stage1_normalize;
pub mod stage2_status;
pub mod stage3_risks;
pub mod stage4_gauge;
pub mod stage5_rank;
pub mod stage6_report;
