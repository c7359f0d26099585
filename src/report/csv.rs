use crate::models::ReportRow;
use crate::text::csv::quote;

const HEADER: &str = "LicenseName,SkuPartNumber,SkuId,DisplayName,UserPrincipalName,UserId,CreatedDateTime,OnPremisesSyncEnabled,AccountEnabled,AssignmentPath,AssignedByGroups,LastUpdated";

/// Render report rows as a CSV document with one quoted record per row.
pub fn render(rows: &[ReportRow]) -> String {
    let mut out = String::from(HEADER);
    out.push('\n');

    for row in rows {
        let fields = [
            row.license_name.clone(),
            row.sku_part_number.clone(),
            row.sku_id.clone(),
            row.display_name.clone(),
            row.user_principal_name.clone(),
            row.user_id.clone(),
            row.created_at.map(|d| d.to_rfc3339()).unwrap_or_default(),
            row.sync_enabled.to_string(),
            row.account_enabled.to_string(),
            row.path.code().to_string(),
            row.groups.join(";"),
            row.last_updated.map(|d| d.to_rfc3339()).unwrap_or_default(),
        ];
        let record: Vec<String> = fields.iter().map(|f| quote(f)).collect();
        out.push_str(&record.join(","));
        out.push('\n');
    }

    out
}
