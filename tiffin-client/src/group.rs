//! Group/member registry
//!
//! Lifecycle of the active dining group and its membership. Nothing here is
//! optimistic: every mutation waits for the backend and then adopts the
//! authoritative state wholesale, so the last network response always wins.

use std::sync::{Arc, RwLock};

use shared::client::{GroupData, InviteLinkData, InvitedUserData, UserRef};
use shared::models::{
    Group, GroupCreate, GroupMember, GroupSummary, GroupUpdate, InviteByPhone, InviteCreate,
    JoinRequest,
};
use shared::response::Empty;
use shared::ApiResponse;

use crate::http::{expect_data, HttpClient};
use crate::{ClientError, ClientResult};

#[derive(Default)]
struct GroupState {
    group: Option<Group>,
    invite_link: Option<String>,
}

/// Active-group registry
#[derive(Clone)]
pub struct GroupRegistry {
    http: HttpClient,
    inner: Arc<RwLock<GroupState>>,
}

impl GroupRegistry {
    pub fn new(http: HttpClient) -> Self {
        Self {
            http,
            inner: Arc::new(RwLock::new(GroupState::default())),
        }
    }

    // ========== Lifecycle ==========

    /// Book a table: create a group and adopt it as the active one
    ///
    /// Returns the new group id. The backend supplies the invite link.
    pub async fn create_group(&self, data: &GroupCreate) -> ClientResult<String> {
        let payload = self
            .http
            .post::<ApiResponse<GroupData>, _>("/groups/create-group", data)
            .await
            .and_then(expect_data)?;

        let id = payload.group.id.clone();
        tracing::info!("Group created: {}", id);
        self.replace(payload.group);
        Ok(id)
    }

    /// Fetch a group and replace local state wholesale
    pub async fn load_group(&self, group_id: &str) -> ClientResult<Group> {
        let payload = self
            .http
            .get::<ApiResponse<GroupData>>(&format!("/groups/{}", group_id))
            .await
            .and_then(expect_data)?;

        tracing::debug!("Group loaded: {}", group_id);
        self.replace(payload.group.clone());
        Ok(payload.group)
    }

    /// Exchange an invite code for membership and adopt the joined group
    pub async fn join_group_by_code(&self, invite_code: &str) -> ClientResult<Group> {
        let request = JoinRequest {
            invite_code: invite_code.to_string(),
        };
        let payload = self
            .http
            .post::<ApiResponse<GroupData>, _>("/invites/join", &request)
            .await
            .and_then(expect_data)?;

        tracing::info!("Joined group: {}", payload.group.id);
        self.replace(payload.group.clone());
        Ok(payload.group)
    }

    /// Preview a group by invite code without joining
    pub async fn group_by_invite_code(&self, invite_code: &str) -> ClientResult<Group> {
        let payload = self
            .http
            .get::<ApiResponse<GroupData>>(&format!("/invites/group/{}", invite_code))
            .await
            .and_then(expect_data)?;
        Ok(payload.group)
    }

    /// Update reservation details of a group
    pub async fn update_group(&self, group_id: &str, update: &GroupUpdate) -> ClientResult<Group> {
        let payload = self
            .http
            .put::<ApiResponse<GroupData>, _>(&format!("/groups/{}", group_id), update)
            .await
            .and_then(expect_data)?;
        self.replace(payload.group.clone());
        Ok(payload.group)
    }

    /// Request deletion; the backend is the authority on permission
    pub async fn delete_group(&self, group_id: &str, user_id: &str) -> ClientResult<()> {
        let body = UserRef {
            user_id: user_id.to_string(),
        };
        self.http
            .delete::<ApiResponse<Empty>, _>(&format!("/groups/{}", group_id), &body)
            .await
            .and_then(expect_data)?;

        tracing::info!("Group deleted: {}", group_id);
        if let Ok(mut inner) = self.inner.write() {
            if inner.group.as_ref().is_some_and(|g| g.id == group_id) {
                inner.group = None;
                inner.invite_link = None;
            }
        }
        Ok(())
    }

    /// All groups the current user belongs to
    pub async fn my_groups(&self) -> ClientResult<Vec<GroupSummary>> {
        let payload = self
            .http
            .get::<ApiResponse<Vec<GroupSummary>>>("/groups/my-groups")
            .await
            .and_then(expect_data)?;
        Ok(payload)
    }

    // ========== Invites ==========

    /// Generate a shareable invite link
    ///
    /// Preconditions checked before any network call: a group must be loaded
    /// and the caller must be its admin.
    pub async fn generate_invite_link(&self, user_id: &str) -> ClientResult<String> {
        let group_id = {
            let inner = self
                .inner
                .read()
                .map_err(|_| ClientError::Internal("Group state poisoned".to_string()))?;
            let Some(group) = &inner.group else {
                return Err(ClientError::Validation(
                    "No active group to invite to".to_string(),
                ));
            };
            if !group.is_admin(user_id) {
                return Err(ClientError::Validation(
                    "Only the group admin can generate invite links".to_string(),
                ));
            }
            group.id.clone()
        };

        let request = InviteCreate {
            group_id,
            admin_id: user_id.to_string(),
        };
        let payload = self
            .http
            .post::<ApiResponse<InviteLinkData>, _>("/invites/invite-member", &request)
            .await
            .and_then(expect_data)?;

        if let Ok(mut inner) = self.inner.write() {
            inner.invite_link = Some(payload.invite_link.clone());
        }
        Ok(payload.invite_link)
    }

    /// Invite a registered user by phone number
    pub async fn invite_user_by_phone(&self, phone: &str) -> ClientResult<String> {
        let Some(group_id) = self.group_id() else {
            return Err(ClientError::Validation(
                "No active group to invite to".to_string(),
            ));
        };

        let request = InviteByPhone {
            group_id,
            phone: phone.to_string(),
        };
        let payload = self
            .http
            .post::<ApiResponse<InvitedUserData>, _>("/invites/invite-user", &request)
            .await
            .and_then(expect_data)?;

        tracing::info!("Invited {}", payload.invited_user.name);
        Ok(payload.invited_user.name)
    }

    // ========== State accessors ==========

    /// Active group id, if any
    pub fn group_id(&self) -> Option<String> {
        self.inner
            .read()
            .ok()
            .and_then(|i| i.group.as_ref().map(|g| g.id.clone()))
    }

    /// Snapshot of the active group
    pub fn group(&self) -> Option<Group> {
        self.inner.read().ok().and_then(|i| i.group.clone())
    }

    /// Members of the active group
    pub fn members(&self) -> Vec<GroupMember> {
        self.inner
            .read()
            .ok()
            .and_then(|i| i.group.as_ref().map(|g| g.group_members.clone()))
            .unwrap_or_default()
    }

    /// Most recent invite link
    pub fn invite_link(&self) -> Option<String> {
        self.inner.read().ok().and_then(|i| i.invite_link.clone())
    }

    fn replace(&self, group: Group) {
        if let Ok(mut inner) = self.inner.write() {
            inner.invite_link = group.invite_link.clone();
            inner.group = Some(group);
        }
    }
}
