//! In-memory collaborator fakes shared by the service tests.
//!
//! Each fake keeps its rows behind a `Mutex` and mirrors the corresponding
//! repository contract closely enough for the services to be exercised
//! end to end without a storage backend.

use std::collections::HashMap;
use std::sync::atomic::{AtomicI64, AtomicUsize, Ordering};
use std::sync::Mutex;

use anyhow::Result;
use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::logging::{ErrorLog, ErrorSeverity};
use crate::models::{
    Category, Forum, ModerationLogEntry, ModerationType, Profile, ServiceHeartbeat,
    SubscribeNotificationPayload, Topic, User, UserImage,
};
use crate::repository::{
    CategoryRepository, FavoriteTopicsRepository, ForumRepository, ModerationLogRepository,
    PointLedgerRepository, ProfileRepository, ServiceHeartbeatRepository,
    SubscribeNotificationRepository, SubscribedTopicsRepository, UserAvatarRepository,
    UserImageRepository, UserRepository,
};
use crate::services::text_parsing::TextParsingService;

pub fn make_user(user_id: i64) -> User {
    User {
        user_id,
        name: format!("User{user_id}"),
        email: format!("user{user_id}@example.com"),
        is_approved: true,
        roles: Vec::new(),
    }
}

pub fn make_topic(topic_id: i64) -> Topic {
    Topic {
        topic_id,
        forum_id: 1,
        title: format!("Topic {topic_id}"),
        is_closed: false,
        is_deleted: false,
    }
}

fn page_slice(topics: &[Topic], start_row: i32, page_size: i32) -> Vec<Topic> {
    let start = (start_row - 1).max(0) as usize;
    topics
        .iter()
        .skip(start)
        .take(page_size.max(0) as usize)
        .cloned()
        .collect()
}

// ============================================================================
// Categories
// ============================================================================

#[derive(Default)]
pub struct MemoryCategoryRepository {
    categories: Mutex<Vec<Category>>,
    next_id: AtomicI64,
    update_calls: AtomicUsize,
}

impl MemoryCategoryRepository {
    pub fn new() -> Self {
        Self {
            categories: Mutex::new(Vec::new()),
            next_id: AtomicI64::new(1),
            update_calls: AtomicUsize::new(0),
        }
    }

    pub fn update_count(&self) -> usize {
        self.update_calls.load(Ordering::SeqCst)
    }

    pub fn reset_update_count(&self) {
        self.update_calls.store(0, Ordering::SeqCst);
    }
}

#[async_trait]
impl CategoryRepository for MemoryCategoryRepository {
    async fn get(&self, category_id: i64) -> Result<Option<Category>> {
        let categories = self.categories.lock().unwrap();
        Ok(categories
            .iter()
            .find(|c| c.category_id == category_id)
            .cloned())
    }

    async fn get_all(&self) -> Result<Vec<Category>> {
        Ok(self.categories.lock().unwrap().clone())
    }

    async fn create(&self, title: &str, sort_order: i32) -> Result<Category> {
        let category = Category {
            category_id: self.next_id.fetch_add(1, Ordering::SeqCst),
            title: title.to_string(),
            sort_order,
        };
        self.categories.lock().unwrap().push(category.clone());
        Ok(category)
    }

    async fn update(&self, category: &Category) -> Result<()> {
        self.update_calls.fetch_add(1, Ordering::SeqCst);
        let mut categories = self.categories.lock().unwrap();
        if let Some(stored) = categories
            .iter_mut()
            .find(|c| c.category_id == category.category_id)
        {
            *stored = category.clone();
        }
        Ok(())
    }

    async fn delete(&self, category_id: i64) -> Result<()> {
        self.categories
            .lock()
            .unwrap()
            .retain(|c| c.category_id != category_id);
        Ok(())
    }
}

// ============================================================================
// Forums
// ============================================================================

#[derive(Default)]
pub struct MemoryForumRepository {
    forums: Mutex<Vec<Forum>>,
    view_roles: Mutex<HashMap<i64, Vec<String>>>,
    post_roles: Mutex<HashMap<i64, Vec<String>>>,
}

impl MemoryForumRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn seed_forum(&self, forum: Forum) {
        self.forums.lock().unwrap().push(forum);
    }

    pub fn set_view_roles(&self, forum_id: i64, roles: &[&str]) {
        self.view_roles
            .lock()
            .unwrap()
            .insert(forum_id, roles.iter().map(|r| r.to_string()).collect());
    }

    pub fn set_post_roles(&self, forum_id: i64, roles: &[&str]) {
        self.post_roles
            .lock()
            .unwrap()
            .insert(forum_id, roles.iter().map(|r| r.to_string()).collect());
    }
}

#[async_trait]
impl ForumRepository for MemoryForumRepository {
    async fn get(&self, forum_id: i64) -> Result<Option<Forum>> {
        Ok(self
            .forums
            .lock()
            .unwrap()
            .iter()
            .find(|f| f.forum_id == forum_id)
            .cloned())
    }

    async fn get_all(&self) -> Result<Vec<Forum>> {
        Ok(self.forums.lock().unwrap().clone())
    }

    async fn get_forum_view_roles(&self, forum_id: i64) -> Result<Vec<String>> {
        Ok(self
            .view_roles
            .lock()
            .unwrap()
            .get(&forum_id)
            .cloned()
            .unwrap_or_default())
    }

    async fn get_forum_post_roles(&self, forum_id: i64) -> Result<Vec<String>> {
        Ok(self
            .post_roles
            .lock()
            .unwrap()
            .get(&forum_id)
            .cloned()
            .unwrap_or_default())
    }

    async fn update_category_association(
        &self,
        forum_id: i64,
        category_id: Option<i64>,
    ) -> Result<()> {
        let mut forums = self.forums.lock().unwrap();
        if let Some(forum) = forums.iter_mut().find(|f| f.forum_id == forum_id) {
            forum.category_id = category_id;
        }
        Ok(())
    }
}

// ============================================================================
// Favorites
// ============================================================================

#[derive(Default)]
pub struct MemoryFavoriteTopicsRepository {
    favorites: Mutex<HashMap<i64, Vec<Topic>>>,
}

impl MemoryFavoriteTopicsRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn seed_favorite(&self, user_id: i64, topic: Topic) {
        self.favorites
            .lock()
            .unwrap()
            .entry(user_id)
            .or_default()
            .push(topic);
    }
}

#[async_trait]
impl FavoriteTopicsRepository for MemoryFavoriteTopicsRepository {
    async fn get_favorite_topics(
        &self,
        user_id: i64,
        start_row: i32,
        page_size: i32,
    ) -> Result<Vec<Topic>> {
        let favorites = self.favorites.lock().unwrap();
        Ok(favorites
            .get(&user_id)
            .map(|topics| page_slice(topics, start_row, page_size))
            .unwrap_or_default())
    }

    async fn get_favorite_topic_count(&self, user_id: i64) -> Result<i32> {
        let favorites = self.favorites.lock().unwrap();
        Ok(favorites.get(&user_id).map(|t| t.len() as i32).unwrap_or(0))
    }

    async fn is_topic_favorite(&self, user_id: i64, topic_id: i64) -> Result<bool> {
        let favorites = self.favorites.lock().unwrap();
        Ok(favorites
            .get(&user_id)
            .map(|topics| topics.iter().any(|t| t.topic_id == topic_id))
            .unwrap_or(false))
    }

    async fn add_favorite_topic(&self, user_id: i64, topic_id: i64) -> Result<()> {
        self.favorites
            .lock()
            .unwrap()
            .entry(user_id)
            .or_default()
            .push(make_topic(topic_id));
        Ok(())
    }

    async fn remove_favorite_topic(&self, user_id: i64, topic_id: i64) -> Result<()> {
        if let Some(topics) = self.favorites.lock().unwrap().get_mut(&user_id) {
            topics.retain(|t| t.topic_id != topic_id);
        }
        Ok(())
    }
}

// ============================================================================
// Subscriptions
// ============================================================================

#[derive(Default)]
pub struct MemorySubscribedTopicsRepository {
    subscriptions: Mutex<HashMap<i64, Vec<Topic>>>,
    add_calls: AtomicUsize,
}

impl MemorySubscribedTopicsRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn seed_subscription(&self, user_id: i64, topic: Topic) {
        self.subscriptions
            .lock()
            .unwrap()
            .entry(user_id)
            .or_default()
            .push(topic);
    }

    pub fn add_call_count(&self) -> usize {
        self.add_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl SubscribedTopicsRepository for MemorySubscribedTopicsRepository {
    async fn get_subscribed_topics(
        &self,
        user_id: i64,
        start_row: i32,
        page_size: i32,
    ) -> Result<Vec<Topic>> {
        let subscriptions = self.subscriptions.lock().unwrap();
        Ok(subscriptions
            .get(&user_id)
            .map(|topics| page_slice(topics, start_row, page_size))
            .unwrap_or_default())
    }

    async fn get_subscribed_topic_count(&self, user_id: i64) -> Result<i32> {
        let subscriptions = self.subscriptions.lock().unwrap();
        Ok(subscriptions
            .get(&user_id)
            .map(|t| t.len() as i32)
            .unwrap_or(0))
    }

    async fn is_topic_subscribed(&self, user_id: i64, topic_id: i64) -> Result<bool> {
        let subscriptions = self.subscriptions.lock().unwrap();
        Ok(subscriptions
            .get(&user_id)
            .map(|topics| topics.iter().any(|t| t.topic_id == topic_id))
            .unwrap_or(false))
    }

    async fn add_subscribed_topic(&self, user_id: i64, topic_id: i64) -> Result<()> {
        self.add_calls.fetch_add(1, Ordering::SeqCst);
        self.subscriptions
            .lock()
            .unwrap()
            .entry(user_id)
            .or_default()
            .push(make_topic(topic_id));
        Ok(())
    }

    async fn remove_subscribed_topic(&self, user_id: i64, topic_id: i64) -> Result<()> {
        if let Some(topics) = self.subscriptions.lock().unwrap().get_mut(&user_id) {
            topics.retain(|t| t.topic_id != topic_id);
        }
        Ok(())
    }

    async fn get_subscribed_user_ids(&self, topic_id: i64) -> Result<Vec<i64>> {
        let subscriptions = self.subscriptions.lock().unwrap();
        let mut user_ids: Vec<i64> = subscriptions
            .iter()
            .filter(|(_, topics)| topics.iter().any(|t| t.topic_id == topic_id))
            .map(|(user_id, _)| *user_id)
            .collect();
        user_ids.sort_unstable();
        Ok(user_ids)
    }
}

#[derive(Default)]
pub struct MemorySubscribeNotificationRepository {
    payloads: Mutex<Vec<SubscribeNotificationPayload>>,
}

impl MemorySubscribeNotificationRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn enqueued(&self) -> Vec<SubscribeNotificationPayload> {
        self.payloads.lock().unwrap().clone()
    }
}

#[async_trait]
impl SubscribeNotificationRepository for MemorySubscribeNotificationRepository {
    async fn enqueue(&self, payload: &SubscribeNotificationPayload) -> Result<()> {
        self.payloads.lock().unwrap().push(payload.clone());
        Ok(())
    }
}

// ============================================================================
// Profiles
// ============================================================================

#[derive(Default)]
pub struct MemoryProfileRepository {
    profiles: Mutex<HashMap<i64, Profile>>,
    avatars: Mutex<HashMap<i64, i64>>,
}

impl MemoryProfileRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn seed_profile(&self, profile: Profile) {
        self.profiles
            .lock()
            .unwrap()
            .insert(profile.user_id, profile);
    }

    pub fn set_signature(&self, user_id: i64, signature: &str) {
        if let Some(profile) = self.profiles.lock().unwrap().get_mut(&user_id) {
            profile.signature = signature.to_string();
        }
    }

    pub fn set_avatar(&self, user_id: i64, avatar_id: i64) {
        self.avatars.lock().unwrap().insert(user_id, avatar_id);
    }
}

#[async_trait]
impl ProfileRepository for MemoryProfileRepository {
    async fn get_profile(&self, user_id: i64) -> Result<Option<Profile>> {
        Ok(self.profiles.lock().unwrap().get(&user_id).cloned())
    }

    async fn create(&self, profile: &Profile) -> Result<()> {
        self.profiles
            .lock()
            .unwrap()
            .insert(profile.user_id, profile.clone());
        Ok(())
    }

    async fn update(&self, profile: &Profile) -> Result<bool> {
        let mut profiles = self.profiles.lock().unwrap();
        match profiles.get_mut(&profile.user_id) {
            Some(stored) => {
                *stored = profile.clone();
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn get_signatures(&self, user_ids: &[i64]) -> Result<HashMap<i64, String>> {
        let profiles = self.profiles.lock().unwrap();
        Ok(user_ids
            .iter()
            .filter_map(|id| {
                profiles
                    .get(id)
                    .filter(|p| !p.signature.is_empty())
                    .map(|p| (*id, p.signature.clone()))
            })
            .collect())
    }

    async fn get_avatars(&self, user_ids: &[i64]) -> Result<HashMap<i64, i64>> {
        let avatars = self.avatars.lock().unwrap();
        Ok(user_ids
            .iter()
            .filter_map(|id| avatars.get(id).map(|avatar_id| (*id, *avatar_id)))
            .collect())
    }

    async fn set_current_image_id_to_null(&self, user_id: i64) -> Result<()> {
        if let Some(profile) = self.profiles.lock().unwrap().get_mut(&user_id) {
            profile.current_image_id = None;
        }
        Ok(())
    }

    async fn update_points(&self, user_id: i64, points: i32) -> Result<()> {
        if let Some(profile) = self.profiles.lock().unwrap().get_mut(&user_id) {
            profile.points = points;
        }
        Ok(())
    }
}

#[derive(Default)]
pub struct MemoryPointLedgerRepository {
    totals: Mutex<HashMap<i64, i32>>,
}

impl MemoryPointLedgerRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_total(&self, user_id: i64, total: i32) {
        self.totals.lock().unwrap().insert(user_id, total);
    }
}

#[async_trait]
impl PointLedgerRepository for MemoryPointLedgerRepository {
    async fn get_point_total(&self, user_id: i64) -> Result<i32> {
        Ok(self
            .totals
            .lock()
            .unwrap()
            .get(&user_id)
            .copied()
            .unwrap_or(0))
    }
}

// ============================================================================
// Moderation log
// ============================================================================

#[derive(Default)]
pub struct MemoryModerationLogRepository {
    log: Mutex<Vec<ModerationLogEntry>>,
}

impl MemoryModerationLogRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entries(&self) -> Vec<ModerationLogEntry> {
        self.log.lock().unwrap().clone()
    }
}

#[async_trait]
impl ModerationLogRepository for MemoryModerationLogRepository {
    async fn log(
        &self,
        moderation_time: DateTime<Utc>,
        user_id: i64,
        user_name: &str,
        moderation_type: ModerationType,
        forum_id: Option<i64>,
        topic_id: i64,
        post_id: Option<i64>,
        comment: &str,
        old_text: &str,
    ) -> Result<()> {
        self.log.lock().unwrap().push(ModerationLogEntry {
            moderation_time,
            user_id,
            user_name: user_name.to_string(),
            moderation_type,
            forum_id,
            topic_id,
            post_id,
            comment: comment.to_string(),
            old_text: old_text.to_string(),
        });
        Ok(())
    }

    async fn get_log_by_date(
        &self,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<Vec<ModerationLogEntry>> {
        Ok(self
            .log
            .lock()
            .unwrap()
            .iter()
            .filter(|e| e.moderation_time >= start && e.moderation_time <= end)
            .cloned()
            .collect())
    }

    async fn get_log_for_topic(
        &self,
        topic_id: i64,
        exclude_post_entries: bool,
    ) -> Result<Vec<ModerationLogEntry>> {
        Ok(self
            .log
            .lock()
            .unwrap()
            .iter()
            .filter(|e| e.topic_id == topic_id)
            .filter(|e| !exclude_post_entries || e.post_id.is_none())
            .cloned()
            .collect())
    }

    async fn get_log_for_post(&self, post_id: i64) -> Result<Vec<ModerationLogEntry>> {
        Ok(self
            .log
            .lock()
            .unwrap()
            .iter()
            .filter(|e| e.post_id == Some(post_id))
            .cloned()
            .collect())
    }
}

// ============================================================================
// Images and users
// ============================================================================

#[derive(Default)]
pub struct MemoryUserAvatarRepository {
    avatars: Mutex<HashMap<i64, (Vec<u8>, DateTime<Utc>)>>,
}

impl MemoryUserAvatarRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn seed_avatar(&self, user_avatar_id: i64, data: Vec<u8>) {
        self.avatars
            .lock()
            .unwrap()
            .insert(user_avatar_id, (data, Utc::now()));
    }
}

#[async_trait]
impl UserAvatarRepository for MemoryUserAvatarRepository {
    async fn get_image_data(&self, user_avatar_id: i64) -> Result<Option<Vec<u8>>> {
        Ok(self
            .avatars
            .lock()
            .unwrap()
            .get(&user_avatar_id)
            .map(|(data, _)| data.clone()))
    }

    async fn get_last_modification_date(
        &self,
        user_avatar_id: i64,
    ) -> Result<Option<DateTime<Utc>>> {
        Ok(self
            .avatars
            .lock()
            .unwrap()
            .get(&user_avatar_id)
            .map(|(_, date)| *date))
    }
}

#[derive(Default)]
pub struct MemoryUserImageRepository {
    images: Mutex<HashMap<i64, UserImage>>,
    data: Mutex<HashMap<i64, Vec<u8>>>,
}

impl MemoryUserImageRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn seed_image(&self, image: UserImage) {
        self.images
            .lock()
            .unwrap()
            .insert(image.user_image_id, image);
    }
}

#[async_trait]
impl UserImageRepository for MemoryUserImageRepository {
    async fn get(&self, user_image_id: i64) -> Result<Option<UserImage>> {
        Ok(self.images.lock().unwrap().get(&user_image_id).cloned())
    }

    async fn get_image_data(&self, user_image_id: i64) -> Result<Option<Vec<u8>>> {
        Ok(self.data.lock().unwrap().get(&user_image_id).cloned())
    }

    async fn is_user_image_approved(&self, user_image_id: i64) -> Result<Option<bool>> {
        Ok(self
            .images
            .lock()
            .unwrap()
            .get(&user_image_id)
            .map(|i| i.is_approved))
    }

    async fn approve_user_image(&self, user_image_id: i64) -> Result<()> {
        if let Some(image) = self.images.lock().unwrap().get_mut(&user_image_id) {
            image.is_approved = true;
        }
        Ok(())
    }

    async fn delete_user_image(&self, user_image_id: i64) -> Result<()> {
        self.images.lock().unwrap().remove(&user_image_id);
        self.data.lock().unwrap().remove(&user_image_id);
        Ok(())
    }

    async fn get_unapproved_user_images(&self) -> Result<Vec<UserImage>> {
        let mut unapproved: Vec<UserImage> = self
            .images
            .lock()
            .unwrap()
            .values()
            .filter(|i| !i.is_approved)
            .cloned()
            .collect();
        unapproved.sort_by_key(|i| i.user_image_id);
        Ok(unapproved)
    }

    async fn get_last_modification_date(
        &self,
        user_image_id: i64,
    ) -> Result<Option<DateTime<Utc>>> {
        Ok(self
            .images
            .lock()
            .unwrap()
            .get(&user_image_id)
            .map(|i| i.time_stamp))
    }
}

#[derive(Default)]
pub struct MemoryUserRepository {
    users: Mutex<Vec<User>>,
}

impl MemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn seed_user(&self, user: User) {
        self.users.lock().unwrap().push(user);
    }
}

#[async_trait]
impl UserRepository for MemoryUserRepository {
    async fn get_users_from_ids(&self, user_ids: &[i64]) -> Result<Vec<User>> {
        Ok(self
            .users
            .lock()
            .unwrap()
            .iter()
            .filter(|u| user_ids.contains(&u.user_id))
            .cloned()
            .collect())
    }
}

// ============================================================================
// Heartbeats
// ============================================================================

#[derive(Default)]
pub struct MemoryServiceHeartbeatRepository {
    heartbeats: Mutex<Vec<ServiceHeartbeat>>,
}

impl MemoryServiceHeartbeatRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ServiceHeartbeatRepository for MemoryServiceHeartbeatRepository {
    async fn record_heartbeat(
        &self,
        service_name: &str,
        machine_name: &str,
        last_run: DateTime<Utc>,
    ) -> Result<()> {
        let mut heartbeats = self.heartbeats.lock().unwrap();
        heartbeats
            .retain(|h| !(h.service_name == service_name && h.machine_name == machine_name));
        heartbeats.push(ServiceHeartbeat {
            service_name: service_name.to_string(),
            machine_name: machine_name.to_string(),
            last_run,
        });
        Ok(())
    }

    async fn get_all(&self) -> Result<Vec<ServiceHeartbeat>> {
        Ok(self.heartbeats.lock().unwrap().clone())
    }

    async fn clear_all(&self) -> Result<()> {
        self.heartbeats.lock().unwrap().clear();
        Ok(())
    }
}

// ============================================================================
// Text parsing and error log
// ============================================================================

/// Text parser that wraps its input in markers naming the conversion, so
/// tests can assert which conversion ran.
pub struct MarkerTextParsingService;

impl TextParsingService for MarkerTextParsingService {
    fn html_to_forum_code(&self, text: &str) -> String {
        format!("forumcode[{text}]")
    }

    fn html_to_client_html(&self, text: &str) -> String {
        format!("client[{text}]")
    }

    fn forum_code_to_html(&self, text: &str) -> String {
        format!("html[{text}]")
    }

    fn client_html_to_html(&self, text: &str) -> String {
        format!("sanitized[{text}]")
    }
}

/// Error log that records what was reported, for assertions.
#[derive(Default)]
pub struct RecordingErrorLog {
    entries: Mutex<Vec<(String, ErrorSeverity)>>,
}

impl RecordingErrorLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entries(&self) -> Vec<(String, ErrorSeverity)> {
        self.entries.lock().unwrap().clone()
    }
}

impl ErrorLog for RecordingErrorLog {
    fn log(&self, error: &anyhow::Error, severity: ErrorSeverity) {
        self.entries
            .lock()
            .unwrap()
            .push((format!("{error:#}"), severity));
    }
}
