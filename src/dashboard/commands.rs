use tauri::State;

use crate::{
    dashboard::{chart_specs, ChartSpecs, DashboardSnapshot},
    AppState,
};

#[tauri::command]
pub fn get_departments(state: State<'_, AppState>) -> Result<Vec<String>, String> {
    Ok(state.dashboard.departments())
}

#[tauri::command]
pub fn get_chart_specs() -> Result<ChartSpecs, String> {
    Ok(chart_specs())
}

/// `department` of `None` (or the literal "ALL") returns the unfiltered set.
#[tauri::command]
pub fn get_dashboard(
    state: State<'_, AppState>,
    department: Option<String>,
) -> Result<DashboardSnapshot, String> {
    Ok(state.dashboard.snapshot(department.as_deref()))
}

#[tauri::command]
pub fn reload_data(state: State<'_, AppState>) -> Result<usize, String> {
    state.dashboard.reload().map_err(|e| e.to_string())
}
