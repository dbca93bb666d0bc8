//! Item synchronization controller
//!
//! Keeps the rendered list equal to the server's latest answer and moves the
//! form between create and edit mode. Every mutation is followed by a full
//! reload; nothing is patched locally.

use std::sync::Arc;

use item_sync_provider::{sanitize_for_log, ItemResource, ResourceError};

use crate::error::{CoreError, CoreResult, RemoteOp};
use crate::services::dispatch;
use crate::traits::ItemSurface;
use crate::types::{
    Effect, FormEvent, FormState, ItemId, ItemPayload, Notice, NoticeKind, NoticeLevel,
};

/// Item synchronization controller
///
/// All operations take `&mut self`, so two of them never overlap. Remote
/// failures are reported through the surface and also returned; none of them
/// leave the controller in an unusable state.
pub struct ItemSyncController {
    resource: Arc<dyn ItemResource>,
    form: FormState,
}

impl ItemSyncController {
    /// Create a controller in create mode
    #[must_use]
    pub fn new(resource: Arc<dyn ItemResource>) -> Self {
        Self {
            resource,
            form: FormState::new(),
        }
    }

    /// Current form state
    #[must_use]
    pub fn form(&self) -> &FormState {
        &self.form
    }

    // ===== Entry points =====

    /// Show the empty form and load the list
    ///
    /// On failure the list stays empty and the user is told the resource may
    /// be unreachable. There is no automatic retry.
    pub async fn initialize<S: ItemSurface + ?Sized>(
        &mut self,
        surface: &mut S,
    ) -> CoreResult<()> {
        log::info!("Initializing item list");
        surface.show_form(&self.form);
        self.reload(surface).await
    }

    /// Handle one user event
    ///
    /// Returns the effect that was applied. For [`Effect::ConfirmDelete`]
    /// nothing happens yet: the caller must ask the user and send back
    /// [`FormEvent::DeleteAnswered`].
    pub async fn handle<S: ItemSurface + ?Sized>(
        &mut self,
        event: FormEvent,
        surface: &mut S,
    ) -> CoreResult<Effect> {
        let effect = match dispatch(&self.form, event) {
            Ok(effect) => effect,
            Err(e) => {
                log::warn!("{e}");
                surface.notify(&Notice::blocking(NoticeKind::EmptyName));
                return Err(e);
            }
        };
        self.apply(effect.clone(), surface).await?;
        Ok(effect)
    }

    /// Submit the form with the text currently in the name field
    pub async fn submit_form<S: ItemSurface + ?Sized>(
        &mut self,
        draft: &str,
        surface: &mut S,
    ) -> CoreResult<Effect> {
        self.handle(
            FormEvent::Submit {
                draft: draft.to_string(),
            },
            surface,
        )
        .await
    }

    /// Execute an effect against the resource and the surface
    pub async fn apply<S: ItemSurface + ?Sized>(
        &mut self,
        effect: Effect,
        surface: &mut S,
    ) -> CoreResult<()> {
        match effect {
            Effect::CreateItem { name } => self.create_item(&name, surface).await,
            Effect::UpdateItem { id, name } => self.update_item(id, &name, surface).await,
            Effect::StartEdit(id) => self.start_edit(id, surface).await,
            Effect::ConfirmDelete(id) => {
                log::debug!("Awaiting delete confirmation for item {id}");
                Ok(())
            }
            Effect::DeleteItem(id) => self.delete_item(id, surface).await,
            Effect::CancelEdit => {
                self.cancel_edit(surface);
                Ok(())
            }
            Effect::Reload => self.reload(surface).await,
            Effect::Noop => {
                log::debug!("Nothing to do");
                Ok(())
            }
        }
    }

    // ===== Operations =====

    /// Load an item into the form for editing
    ///
    /// A failed fetch is only logged and shown passively; the form is left
    /// as it was.
    pub async fn start_edit<S: ItemSurface + ?Sized>(
        &mut self,
        id: ItemId,
        surface: &mut S,
    ) -> CoreResult<()> {
        match self.resource.get_item(&id).await {
            Ok(item) => {
                log::debug!("Editing item {id} '{}'", sanitize_for_log(&item.name));
                self.form.start_editing(id, item.name);
                surface.show_form(&self.form);
                surface.focus_name_input();
                Ok(())
            }
            Err(e) => Err(Self::fail(RemoteOp::Get, e, NoticeLevel::Passive, surface)),
        }
    }

    /// Leave edit mode without saving
    pub fn cancel_edit<S: ItemSurface + ?Sized>(&mut self, surface: &mut S) {
        self.reset_form(surface);
    }

    /// Fetch the list and render it
    ///
    /// On failure the previously rendered rows are kept.
    pub async fn reload<S: ItemSurface + ?Sized>(&mut self, surface: &mut S) -> CoreResult<()> {
        match self.resource.list_items().await {
            Ok(items) => {
                log::debug!("Loaded {} item(s)", items.len());
                surface.render(&items);
                Ok(())
            }
            Err(e) => {
                let err = Self::fail(RemoteOp::List, e, NoticeLevel::Passive, surface);
                surface.notify(&Notice::blocking(NoticeKind::ResourceUnreachable));
                Err(err)
            }
        }
    }

    async fn create_item<S: ItemSurface + ?Sized>(
        &mut self,
        name: &str,
        surface: &mut S,
    ) -> CoreResult<()> {
        log::info!("Creating item '{}'", sanitize_for_log(name));
        if let Err(e) = self.resource.create_item(&ItemPayload::new(name)).await {
            return Err(Self::fail(RemoteOp::Create, e, NoticeLevel::Blocking, surface));
        }
        self.after_save(surface).await;
        Ok(())
    }

    async fn update_item<S: ItemSurface + ?Sized>(
        &mut self,
        id: ItemId,
        name: &str,
        surface: &mut S,
    ) -> CoreResult<()> {
        log::info!("Updating item {id} to '{}'", sanitize_for_log(name));
        if let Err(e) = self
            .resource
            .update_item(&id, &ItemPayload::new(name))
            .await
        {
            return Err(Self::fail(RemoteOp::Update, e, NoticeLevel::Blocking, surface));
        }
        self.after_save(surface).await;
        Ok(())
    }

    async fn delete_item<S: ItemSurface + ?Sized>(
        &mut self,
        id: ItemId,
        surface: &mut S,
    ) -> CoreResult<()> {
        log::info!("Deleting item {id}");
        if let Err(e) = self.resource.delete_item(&id).await {
            return Err(Self::fail(RemoteOp::Delete, e, NoticeLevel::Blocking, surface));
        }
        // The mutation stands even if the reload fails; that failure is already reported.
        let _ = self.reload(surface).await;
        if self.form.editing_id() == Some(&id) {
            self.reset_form(surface);
        }
        Ok(())
    }

    // ===== Helpers =====

    /// Reload, then reset the form whether or not the reload worked
    async fn after_save<S: ItemSurface + ?Sized>(&mut self, surface: &mut S) {
        let _ = self.reload(surface).await;
        self.reset_form(surface);
    }

    fn reset_form<S: ItemSurface + ?Sized>(&mut self, surface: &mut S) {
        self.form.reset();
        surface.show_form(&self.form);
        surface.focus_name_input();
    }

    /// Log a failed remote call, notify the user and build the error
    fn fail<S: ItemSurface + ?Sized>(
        op: RemoteOp,
        source: ResourceError,
        level: NoticeLevel,
        surface: &mut S,
    ) -> CoreError {
        let detail = source.to_string();
        let err = CoreError::RemoteOperation { op, source };
        if err.is_expected() {
            log::warn!("{err}");
        } else {
            log::error!("{err}");
        }
        surface.notify(&Notice {
            level,
            kind: NoticeKind::OperationFailed { op, detail },
        });
        err
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::display::literal_text;
    use crate::test_utils::{create_test_controller, Call, RecordingSurface};
    use crate::types::FormMode;

    fn http_500() -> ResourceError {
        ResourceError::HttpStatus {
            status: 500,
            raw_message: Some("boom".to_string()),
        }
    }

    // ===== Initialize / Reload =====

    #[tokio::test]
    async fn initialize_renders_server_list() {
        let (mut ctrl, resource) = create_test_controller(&[(1, "Milk"), (2, "Eggs")]);
        let mut surface = RecordingSurface::default();

        ctrl.initialize(&mut surface).await.unwrap();

        assert_eq!(surface.names(), ["Milk", "Eggs"]);
        assert_eq!(resource.calls().await, [Call::List]);
        assert_eq!(surface.forms.last(), Some(&FormState::new()));
    }

    #[tokio::test]
    async fn initialize_failure_leaves_list_empty() {
        let (mut ctrl, resource) = create_test_controller(&[(1, "Milk")]);
        resource
            .fail_on(
                RemoteOp::List,
                ResourceError::NetworkError {
                    detail: "connection refused".into(),
                },
            )
            .await;
        let mut surface = RecordingSurface::default();

        let result = ctrl.initialize(&mut surface).await;

        assert!(matches!(
            result,
            Err(CoreError::RemoteOperation {
                op: RemoteOp::List,
                ..
            })
        ));
        assert!(surface.renders.is_empty());
        assert!(surface
            .notices
            .contains(&Notice::blocking(NoticeKind::ResourceUnreachable)));
    }

    #[tokio::test]
    async fn failed_reload_keeps_previous_rows() {
        let (mut ctrl, resource) = create_test_controller(&[(1, "Milk")]);
        let mut surface = RecordingSurface::default();
        ctrl.initialize(&mut surface).await.unwrap();

        resource.fail_on(RemoteOp::List, http_500()).await;
        let result = ctrl.handle(FormEvent::RefreshRequested, &mut surface).await;

        assert!(result.is_err());
        assert_eq!(surface.renders.len(), 1);
        assert_eq!(surface.names(), ["Milk"]);
        assert_eq!(
            surface.notices,
            [
                Notice::passive(NoticeKind::OperationFailed {
                    op: RemoteOp::List,
                    detail: "HTTP 500: boom".into(),
                }),
                Notice::blocking(NoticeKind::ResourceUnreachable),
            ]
        );
    }

    #[tokio::test]
    async fn repeated_reloads_render_identical_rows() {
        let (mut ctrl, _resource) = create_test_controller(&[(1, "Milk"), (2, "Eggs")]);
        let mut surface = RecordingSurface::default();

        ctrl.reload(&mut surface).await.unwrap();
        ctrl.reload(&mut surface).await.unwrap();

        assert_eq!(surface.renders.len(), 2);
        assert_eq!(surface.renders[0], surface.renders[1]);
    }

    // ===== Submit =====

    #[tokio::test]
    async fn create_sends_trimmed_name_then_reloads() {
        let (mut ctrl, resource) = create_test_controller(&[]);
        let mut surface = RecordingSurface::default();

        let effect = ctrl.submit_form("  Milk  ", &mut surface).await.unwrap();

        assert_eq!(
            effect,
            Effect::CreateItem {
                name: "Milk".into()
            }
        );
        assert_eq!(
            resource.calls().await,
            [Call::Create("Milk".into()), Call::List]
        );
        assert_eq!(surface.names(), ["Milk"]);
        assert_eq!(ctrl.form(), &FormState::new());
        assert!(surface.focus_requests > 0);
    }

    #[tokio::test]
    async fn blank_submit_makes_no_calls() {
        let (mut ctrl, resource) = create_test_controller(&[(1, "Milk")]);
        let mut surface = RecordingSurface::default();
        ctrl.start_edit(ItemId::from(1), &mut surface).await.unwrap();
        let before = ctrl.form().clone();
        resource.clear_calls().await;

        for draft in ["", "   ", "\t"] {
            let result = ctrl.submit_form(draft, &mut surface).await;
            assert!(matches!(result, Err(CoreError::Validation(_))));
        }

        assert!(resource.calls().await.is_empty());
        assert_eq!(ctrl.form(), &before);
        assert_eq!(
            surface.notices.last(),
            Some(&Notice::blocking(NoticeKind::EmptyName))
        );
    }

    #[tokio::test]
    async fn edit_then_submit_updates_milk_to_oat_milk() {
        let (mut ctrl, resource) = create_test_controller(&[(1, "Milk")]);
        let mut surface = RecordingSurface::default();
        ctrl.initialize(&mut surface).await.unwrap();

        ctrl.handle(FormEvent::EditRequested(ItemId::from(1)), &mut surface)
            .await
            .unwrap();
        assert_eq!(ctrl.form().mode(), FormMode::Editing(&ItemId::from(1)));
        assert_eq!(ctrl.form().draft_name(), "Milk");

        let effect = ctrl.submit_form("Oat Milk", &mut surface).await.unwrap();

        assert_eq!(
            effect,
            Effect::UpdateItem {
                id: ItemId::from(1),
                name: "Oat Milk".into()
            }
        );
        assert_eq!(
            resource.calls().await,
            [
                Call::List,
                Call::Get(ItemId::from(1)),
                Call::Update(ItemId::from(1), "Oat Milk".into()),
                Call::List,
            ]
        );
        assert_eq!(surface.names(), ["Oat Milk"]);
        assert_eq!(ctrl.form().mode(), FormMode::Creating);
        assert_eq!(ctrl.form().draft_name(), "");
    }

    #[tokio::test]
    async fn create_failure_keeps_form_and_skips_reload() {
        let (mut ctrl, resource) = create_test_controller(&[]);
        resource.fail_on(RemoteOp::Create, http_500()).await;
        let mut surface = RecordingSurface::default();

        let result = ctrl.submit_form("Milk", &mut surface).await;

        assert!(matches!(
            result,
            Err(CoreError::RemoteOperation {
                op: RemoteOp::Create,
                ..
            })
        ));
        assert_eq!(resource.calls().await, [Call::Create("Milk".into())]);
        assert!(surface.renders.is_empty());
        assert!(surface.forms.is_empty());
        assert_eq!(
            surface.notices,
            [Notice::blocking(NoticeKind::OperationFailed {
                op: RemoteOp::Create,
                detail: "HTTP 500: boom".into(),
            })]
        );
    }

    #[tokio::test]
    async fn update_failure_stays_in_edit_mode() {
        let (mut ctrl, resource) = create_test_controller(&[(1, "Milk")]);
        let mut surface = RecordingSurface::default();
        ctrl.start_edit(ItemId::from(1), &mut surface).await.unwrap();
        resource.fail_on(RemoteOp::Update, http_500()).await;

        let result = ctrl.submit_form("Oat Milk", &mut surface).await;

        assert!(result.is_err());
        assert_eq!(ctrl.form().editing_id(), Some(&ItemId::from(1)));
        assert_eq!(resource.names().await, ["Milk"]);
    }

    #[tokio::test]
    async fn form_resets_even_when_reload_after_save_fails() {
        let (mut ctrl, resource) = create_test_controller(&[(1, "Milk")]);
        let mut surface = RecordingSurface::default();
        ctrl.start_edit(ItemId::from(1), &mut surface).await.unwrap();
        resource.fail_on(RemoteOp::List, http_500()).await;

        let result = ctrl.submit_form("Oat Milk", &mut surface).await;

        assert!(result.is_ok());
        assert_eq!(ctrl.form(), &FormState::new());
        assert!(surface
            .notices
            .contains(&Notice::blocking(NoticeKind::ResourceUnreachable)));
    }

    #[tokio::test]
    async fn markup_name_is_rendered_verbatim() {
        let (mut ctrl, _resource) = create_test_controller(&[]);
        let mut surface = RecordingSurface::default();

        ctrl.submit_form("<script>x</script>", &mut surface)
            .await
            .unwrap();

        assert_eq!(surface.names(), ["<script>x</script>"]);
        assert_eq!(literal_text(&surface.names()[0]), "<script>x</script>");
    }

    // ===== Edit / Cancel =====

    #[tokio::test]
    async fn edit_then_cancel_returns_to_create_mode() {
        let (mut ctrl, resource) = create_test_controller(&[(1, "Milk")]);
        let mut surface = RecordingSurface::default();
        ctrl.start_edit(ItemId::from(1), &mut surface).await.unwrap();

        let effect = ctrl
            .handle(FormEvent::CancelRequested, &mut surface)
            .await
            .unwrap();

        assert_eq!(effect, Effect::CancelEdit);
        assert_eq!(ctrl.form().mode(), FormMode::Creating);
        assert_eq!(ctrl.form().draft_name(), "");
        assert_eq!(surface.forms.last(), Some(&FormState::new()));
        assert_eq!(resource.calls().await, [Call::Get(ItemId::from(1))]);
    }

    #[tokio::test]
    async fn edit_failure_is_passive_and_leaves_form() {
        let (mut ctrl, resource) = create_test_controller(&[]);
        let mut surface = RecordingSurface::default();

        let result = ctrl.start_edit(ItemId::from(9), &mut surface).await;

        assert!(matches!(
            result,
            Err(CoreError::RemoteOperation {
                op: RemoteOp::Get,
                ..
            })
        ));
        assert_eq!(ctrl.form(), &FormState::new());
        assert!(surface.forms.is_empty());
        assert!(surface.notices.iter().all(|n| !n.is_blocking()));
        assert_eq!(resource.calls().await, [Call::Get(ItemId::from(9))]);
    }

    // ===== Delete =====

    #[tokio::test]
    async fn declined_delete_makes_no_calls() {
        let (mut ctrl, resource) = create_test_controller(&[(1, "Milk")]);
        let mut surface = RecordingSurface::default();

        let asked = ctrl
            .handle(FormEvent::DeleteRequested(ItemId::from(1)), &mut surface)
            .await
            .unwrap();
        let answered = ctrl
            .handle(
                FormEvent::DeleteAnswered {
                    id: ItemId::from(1),
                    confirmed: false,
                },
                &mut surface,
            )
            .await
            .unwrap();

        assert_eq!(asked, Effect::ConfirmDelete(ItemId::from(1)));
        assert_eq!(answered, Effect::Noop);
        assert!(resource.calls().await.is_empty());
        assert_eq!(resource.names().await, ["Milk"]);
    }

    #[tokio::test]
    async fn confirmed_delete_reloads() {
        let (mut ctrl, resource) = create_test_controller(&[(1, "Milk"), (2, "Eggs")]);
        let mut surface = RecordingSurface::default();

        ctrl.handle(
            FormEvent::DeleteAnswered {
                id: ItemId::from(1),
                confirmed: true,
            },
            &mut surface,
        )
        .await
        .unwrap();

        assert_eq!(
            resource.calls().await,
            [Call::Delete(ItemId::from(1)), Call::List]
        );
        assert_eq!(surface.names(), ["Eggs"]);
    }

    #[tokio::test]
    async fn deleting_edited_item_resets_form() {
        let (mut ctrl, _resource) = create_test_controller(&[(1, "Milk"), (2, "Eggs")]);
        let mut surface = RecordingSurface::default();
        ctrl.start_edit(ItemId::from(1), &mut surface).await.unwrap();

        ctrl.handle(
            FormEvent::DeleteAnswered {
                id: ItemId::from(1),
                confirmed: true,
            },
            &mut surface,
        )
        .await
        .unwrap();

        assert_eq!(ctrl.form(), &FormState::new());
    }

    #[tokio::test]
    async fn deleting_other_item_keeps_edit_mode() {
        let (mut ctrl, _resource) = create_test_controller(&[(1, "Milk"), (2, "Eggs")]);
        let mut surface = RecordingSurface::default();
        ctrl.start_edit(ItemId::from(1), &mut surface).await.unwrap();

        ctrl.handle(
            FormEvent::DeleteAnswered {
                id: ItemId::from(2),
                confirmed: true,
            },
            &mut surface,
        )
        .await
        .unwrap();

        assert_eq!(ctrl.form().editing_id(), Some(&ItemId::from(1)));
        assert_eq!(ctrl.form().draft_name(), "Milk");
    }

    #[tokio::test]
    async fn delete_failure_reports_and_skips_reload() {
        let (mut ctrl, resource) = create_test_controller(&[(1, "Milk")]);
        resource
            .fail_on(
                RemoteOp::Delete,
                ResourceError::NotFound {
                    item_id: "1".into(),
                    raw_message: None,
                },
            )
            .await;
        let mut surface = RecordingSurface::default();

        let result = ctrl
            .handle(
                FormEvent::DeleteAnswered {
                    id: ItemId::from(1),
                    confirmed: true,
                },
                &mut surface,
            )
            .await;

        assert!(result.is_err());
        assert_eq!(resource.calls().await, [Call::Delete(ItemId::from(1))]);
        assert!(surface.renders.is_empty());
        assert!(surface.notices[0].is_blocking());
    }
}
