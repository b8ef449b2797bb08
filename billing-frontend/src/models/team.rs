use serde::Deserialize;

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct Team {
    pub id: String,
    pub name: String,
}

/// Row of `team_memberships` with its team embedded.
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct TeamMembership {
    pub id: String,
    /// Embedded resource; `null` when the team row is not visible to the user.
    #[serde(rename = "teams", default)]
    pub team: Option<Team>,
}

impl TeamMembership {
    pub const SELECT: &'static str = "id,teams(name,id)";
}
