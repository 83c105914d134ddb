use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Placeholder GUID for identity fields the transform has not populated.
pub const NIL_GUID: &str = "{00000000-0000-0000-0000-000000000000}";

/// Placeholder timestamp (1900-01-01 UTC, epoch milliseconds) for the two
/// date fields downstream consumers expect to be non-null.
pub const UNSET_DATE_MS: i64 = -2_209_161_600_000;

/// One output record of the feature collection.
///
/// The key set is fixed: this struct is the full record view of the
/// consuming system's wider schema, and every key serializes on every record
/// regardless of which source fields were populated. Fields written by the
/// joiner's copy step are `Value`-typed because source values pass through
/// unchanged, nulls included; the remaining fields are reserved for the
/// consuming system and keep their documented defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeatureRecord {
    pub legal_instrument_title: Option<String>,
    #[serde(rename = "legalInstrumentURL")]
    pub legal_instrument_url: Option<String>,
    pub legal_instrument_id: Option<i64>,
    pub legal_reference: Option<String>,
    pub gazette_issue_number: Option<i64>,
    pub gazette_page_number: Option<i64>,
    pub publication_date: Option<i64>,
    pub effective_date_from: Option<i64>,
    pub year_enacted: Option<i64>,
    pub speed_limit_zone_reason_name: Option<String>,
    pub speed_limit_zone_var_prd_name: Option<String>,
    pub speed_limit_zone_lane_purpose_name: Option<String>,
    pub speed_limit_zone_structure_type_name: Option<String>,
    pub speed_limit_zone_status_type_name: Option<String>,
    pub speed_value_type_name: Option<String>,
    pub speed_category_name: Option<String>,
    pub variable_speeds: Option<Value>,
    pub rca_zone_reference_name: Option<String>,
    pub speed_limit_zone_id: Value,
    pub speed_management_plan_name: Option<String>,
    #[serde(rename = "speedManagementPlanURL")]
    pub speed_management_plan_url: Option<String>,
    pub speed_limit_zone_name: Value,
    pub speed_limit_zone_status_date: i64,
    pub speed_limit_zone_start_date: Value,
    pub speed_limit_zone_end_date: Value,
    #[serde(rename = "speedLimitZoneApprovalURL")]
    pub speed_limit_zone_approval_url: Option<String>,
    pub speed_limit_zone_approval_end_date: Option<i64>,
    pub speed_limit_zone_seasonal_recurring: Option<bool>,
    pub speed_limit_zone_seasonal_desc: Option<String>,
    pub speed_limit_zone_emergency_reason: Option<String>,
    pub speed_limit_zone_description: Option<String>,
    pub speed_zone_direction_type_id: Option<i64>,
    pub speed_limit_zone_lock: i64,
    pub speed_limit_zone_lock_owner: Option<String>,
    pub speed_limit_zone_lock_start_date: Option<i64>,
    pub lanes_out_from_centreline: Option<i64>,
    pub speed_limit_zone_submitted_by: Option<String>,
    #[serde(rename = "GlobalIdGeometry")]
    pub global_id_geometry: Option<String>,
    pub speed_limit_zone_seasonal_recur: Option<String>,
    pub parent_speed_limit_zone_id: Option<String>,
    #[serde(rename = "CorrectionCount")]
    pub correction_count: Option<i64>,
    #[serde(rename = "ClarificationCount")]
    pub clarification_count: Option<i64>,
    #[serde(rename = "GlobalID")]
    pub global_id: String,
    #[serde(rename = "OBJECTID")]
    pub object_id: Value,
    pub display_speed: Option<i64>,
    #[serde(rename = "GeometryCount")]
    pub geometry_count: Option<i64>,
    pub last_edited_user: Option<String>,
    pub geometry: Option<Value>,
    pub rca_zone_reference_id: Value,
    pub speed_category_id: Value,
    pub speed_value_type_id: Value,
    pub speed_limit_zone_status_type_id: Value,
}

impl Default for FeatureRecord {
    fn default() -> Self {
        Self {
            legal_instrument_title: None,
            legal_instrument_url: None,
            legal_instrument_id: None,
            legal_reference: None,
            gazette_issue_number: None,
            gazette_page_number: None,
            publication_date: None,
            effective_date_from: None,
            year_enacted: None,
            speed_limit_zone_reason_name: None,
            speed_limit_zone_var_prd_name: None,
            speed_limit_zone_lane_purpose_name: None,
            speed_limit_zone_structure_type_name: None,
            speed_limit_zone_status_type_name: None,
            speed_value_type_name: None,
            speed_category_name: None,
            variable_speeds: None,
            rca_zone_reference_name: None,
            speed_limit_zone_id: Value::String(NIL_GUID.to_string()),
            speed_management_plan_name: None,
            speed_management_plan_url: None,
            speed_limit_zone_name: Value::Null,
            speed_limit_zone_status_date: UNSET_DATE_MS,
            speed_limit_zone_start_date: Value::from(UNSET_DATE_MS),
            speed_limit_zone_end_date: Value::Null,
            speed_limit_zone_approval_url: None,
            speed_limit_zone_approval_end_date: None,
            speed_limit_zone_seasonal_recurring: None,
            speed_limit_zone_seasonal_desc: None,
            speed_limit_zone_emergency_reason: None,
            speed_limit_zone_description: None,
            speed_zone_direction_type_id: None,
            speed_limit_zone_lock: 0,
            speed_limit_zone_lock_owner: None,
            speed_limit_zone_lock_start_date: None,
            lanes_out_from_centreline: None,
            speed_limit_zone_submitted_by: None,
            global_id_geometry: None,
            speed_limit_zone_seasonal_recur: None,
            parent_speed_limit_zone_id: None,
            correction_count: None,
            clarification_count: None,
            global_id: NIL_GUID.to_string(),
            object_id: Value::Null,
            display_speed: None,
            geometry_count: None,
            last_edited_user: None,
            geometry: None,
            rca_zone_reference_id: Value::Null,
            speed_category_id: Value::Null,
            speed_value_type_id: Value::Null,
            speed_limit_zone_status_type_id: Value::Null,
        }
    }
}

impl FeatureRecord {
    /// Overlay one zone-table field onto the record by name.
    ///
    /// Returns false when the name is not a recognized zone field; the record
    /// is unchanged in that case, keeping the key set fixed.
    pub fn apply_zone_field(&mut self, name: &str, value: Value) -> bool {
        let slot = if name.eq_ignore_ascii_case("OBJECTID") {
            &mut self.object_id
        } else if name.eq_ignore_ascii_case("speedLimitZoneId") {
            &mut self.speed_limit_zone_id
        } else if name.eq_ignore_ascii_case("rcaZoneReferenceId") {
            &mut self.rca_zone_reference_id
        } else if name.eq_ignore_ascii_case("speedLimitZoneName") {
            &mut self.speed_limit_zone_name
        } else if name.eq_ignore_ascii_case("speedCategoryId") {
            &mut self.speed_category_id
        } else if name.eq_ignore_ascii_case("speedValueTypeId") {
            &mut self.speed_value_type_id
        } else if name.eq_ignore_ascii_case("speedLimitZoneStatusTypeId") {
            &mut self.speed_limit_zone_status_type_id
        } else if name.eq_ignore_ascii_case("speedLimitZoneStartDate") {
            &mut self.speed_limit_zone_start_date
        } else if name.eq_ignore_ascii_case("speedLimitZoneEndDate") {
            &mut self.speed_limit_zone_end_date
        } else {
            return false;
        };
        *slot = value;
        true
    }
}
