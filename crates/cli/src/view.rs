use serde::Serialize;
use tabled::Tabled;
use tagscan_api::{Member, TagSet, Unit};

fn join_tags(tags: &TagSet) -> String {
    if tags.is_empty() {
        return "-".to_string();
    }
    tags.iter()
        .map(|t| t.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

/// One row per discovered unit
#[derive(Tabled)]
pub struct UnitRow {
    #[tabled(rename = "Identifier")]
    pub identifier: String,
    #[tabled(rename = "Tags")]
    pub tags: String,
    #[tabled(rename = "Runner")]
    pub runner: String,
    #[tabled(rename = "Members")]
    pub members: usize,
}

impl UnitRow {
    pub fn from_unit(unit: &Unit) -> Self {
        Self {
            identifier: unit.id.to_string(),
            tags: join_tags(&unit.tags),
            runner: unit
                .runner
                .as_ref()
                .map(|r| r.to_string())
                .unwrap_or_else(|| "-".to_string()),
            members: unit.members.len(),
        }
    }
}

#[derive(Tabled, Serialize)]
pub struct MemberRow {
    #[tabled(rename = "Name")]
    pub name: String,
    #[tabled(rename = "Unit")]
    pub owner: String,
    #[tabled(rename = "Tags")]
    pub tags: String,
}

impl MemberRow {
    pub fn from_member(member: &Member) -> Self {
        Self {
            name: member.name.clone(),
            owner: member
                .owner
                .as_ref()
                .map(|o| o.to_string())
                .unwrap_or_else(|| "-".to_string()),
            tags: join_tags(&member.tags),
        }
    }
}
