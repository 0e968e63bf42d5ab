//! Terminal and JSON rendering of views

use covenant_core::notices;
use covenant_core::{
    Blueprint, BlueprintDraft, BlueprintOption, Contract, DashboardRow, Field, FieldKind,
    RowStyle, Status, View,
};
use serde_json::{json, Value};

pub(crate) fn dashboard(rows: &[DashboardRow], json: bool) -> String {
    if json {
        let rows: Vec<Value> = rows
            .iter()
            .map(|row| {
                json!({
                    "id": row.contract.id().as_str(),
                    "name": row.contract.name(),
                    "blueprint": row.blueprint_name,
                    "status": row.contract.status().as_str(),
                    "locked": row.style == RowStyle::Locked,
                })
            })
            .collect();
        return format!("{:#}", Value::Array(rows));
    }

    if rows.is_empty() {
        return notices::NO_CONTRACTS.to_owned();
    }
    let name_width = column_width(rows.iter().map(|r| r.contract.name()), "NAME");
    let bp_width = column_width(rows.iter().map(|r| r.blueprint_name.as_str()), "BLUEPRINT");

    let header = format!("{:<36}  {:<name_width$}  {:<bp_width$}  STATUS", "ID", "NAME", "BLUEPRINT");
    let lines = rows.iter().map(|row| {
        let marker = match row.style {
            RowStyle::Locked => " (locked)",
            RowStyle::Active => "",
        };
        format!(
            "{:<36}  {:<name_width$}  {:<bp_width$}  {}{marker}",
            row.contract.id(),
            row.contract.name(),
            row.blueprint_name,
            row.contract.status(),
        )
    });
    std::iter::once(header).chain(lines).collect::<Vec<_>>().join("\n")
}

fn column_width<'a>(values: impl Iterator<Item = &'a str>, header: &str) -> usize {
    values
        .map(|v| v.chars().count())
        .chain(std::iter::once(header.len()))
        .max()
        .unwrap_or(header.len())
}

pub(crate) fn blueprints(list: &[Blueprint], json: bool) -> anyhow::Result<String> {
    if json {
        return Ok(serde_json::to_string_pretty(list)?);
    }
    if list.is_empty() {
        return Ok("No blueprints created yet".to_owned());
    }
    Ok(list
        .iter()
        .map(|bp| {
            let kinds: Vec<&str> = bp.fields().iter().map(|f| f.kind().as_str()).collect();
            format!("{}  {}  [{}]", bp.id(), bp.name(), kinds.join(", "))
        })
        .collect::<Vec<_>>()
        .join("\n"))
}

pub(crate) fn blueprint(bp: &Blueprint, json: bool) -> anyhow::Result<String> {
    if json {
        return Ok(serde_json::to_string_pretty(bp)?);
    }
    let head = format!("{}  {}", bp.id(), bp.name());
    let fields = bp
        .fields()
        .iter()
        .map(|field| format!("  {}  {}", field.id(), field.kind()));
    Ok(std::iter::once(head).chain(fields).collect::<Vec<_>>().join("\n"))
}

pub(crate) fn contract(contract: &Contract, json: bool) -> anyhow::Result<String> {
    if json {
        return Ok(serde_json::to_string_pretty(contract)?);
    }
    let mut lines = vec![
        format!("{}  {}", contract.id(), contract.name()),
        format!("blueprint: {}", contract.blueprint_id()),
        format!("status: {}", contract.status()),
    ];
    lines.extend(contract.fields().iter().map(|f| format!("  {}", field_line(f))));
    if contract.is_locked() {
        lines.push(notices::CONTRACT_LOCKED.to_owned());
    }
    Ok(lines.join("\n"))
}

fn field_line(field: &Field) -> String {
    let value = field.value().map(ToString::to_string).unwrap_or_default();
    let shown = if value.is_empty() && field.kind() == FieldKind::Signature {
        format!("({})", notices::SIGNATURE_HINT)
    } else {
        value
    };
    format!("{}  {:<9} {shown}", field.id(), field.label())
}

pub(crate) fn status(contract_id: &str, status: Status, json: bool) -> String {
    if json {
        return format!("{:#}", json!({ "id": contract_id, "status": status.as_str() }));
    }
    format!("{contract_id}  {status}")
}

fn options(list: &[BlueprintOption], json: bool) -> String {
    if json {
        let list: Vec<Value> = list
            .iter()
            .map(|o| json!({ "id": o.id.as_str(), "name": o.name }))
            .collect();
        return format!("{:#}", Value::Array(list));
    }
    if list.is_empty() {
        return "No blueprints to choose from".to_owned();
    }
    list.iter()
        .map(|o| format!("{}  {}", o.id, o.name))
        .collect::<Vec<_>>()
        .join("\n")
}

fn draft(draft: &BlueprintDraft, json: bool) -> String {
    if json {
        let kinds: Vec<&str> = draft.fields().iter().map(|f| f.kind().as_str()).collect();
        return format!("{:#}", json!({ "name": draft.name(), "fields": kinds }));
    }
    let kinds: Vec<&str> = FieldKind::ALL.iter().map(|k| k.as_str()).collect();
    format!(
        "New blueprint ({} fields)\nfield kinds: {}",
        draft.field_count(),
        kinds.join(", ")
    )
}

pub(crate) fn view(view: &View, json: bool) -> anyhow::Result<String> {
    Ok(match view {
        View::Dashboard(rows) => dashboard(rows, json),
        View::BlueprintBuilder(d) => draft(d, json),
        View::CreateContract(list) => options(list, json),
        View::ContractEditor(editor) => contract(editor.contract(), json)?,
        View::Empty if json => "null".to_owned(),
        View::Empty => String::new(),
    })
}
