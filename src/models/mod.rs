pub mod attendance;
pub mod record;
pub mod semester;
pub mod status;
pub mod subject_summary;
pub mod timetable;
