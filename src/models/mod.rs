pub mod report;
pub mod request;
pub mod review;

pub use report::{
    ConsumptionSummary, DataQualityIndicators, EnergyLoadSummary, FacilityInfo, HourlyLoadPoint,
    HourlyProfile, PeakEvent, Period, Report,
};
pub use request::ReportRequest;
pub use review::{
    ComparisonEntry, ComparisonWithPrevious, DailyBarPoint, Direction, LoadProfileAnalysis,
    OperatingHours, OperatingWindow, PatternTable, PerformanceReview, ProfileStats, SummaryCards,
};
