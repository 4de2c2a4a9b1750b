mod planner;

pub use planner::ScanPlanner;
