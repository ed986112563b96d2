use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Deserialize, ToSchema, Default)]
pub struct DevSignInDto {
    pub email: Option<String>,
    pub name: Option<String>,
}

#[derive(Clone, Serialize, Deserialize, ToSchema)]
pub struct AuthUserDto {
    pub id: i32,
    pub email: String,
    pub name: Option<String>,
}

#[derive(Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DevSignInResponseDto {
    pub success: bool,
    pub user: AuthUserDto,
    pub has_completed_onboarding: bool,
}
