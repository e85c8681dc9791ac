use super::model;
use contracts::domain::a001_client::aggregate::Client;
use contracts::domain::common::{FieldErrors, RecordId, Validate};
use leptos::prelude::*;
use leptos::task::spawn_local;
use std::rc::Rc;

use crate::shared::toast::NotifierHandle;

/// ViewModel for the client form
#[derive(Clone)]
pub struct ClientDetailsViewModel {
    pub form: RwSignal<Client>,
    pub errors: RwSignal<FieldErrors>,
    pub loading: RwSignal<bool>,
    pub saving: RwSignal<bool>,
    notifier: NotifierHandle,
}

impl ClientDetailsViewModel {
    pub fn new(notifier: NotifierHandle) -> Self {
        Self {
            form: RwSignal::new(Client::default()),
            errors: RwSignal::new(FieldErrors::new()),
            loading: RwSignal::new(false),
            saving: RwSignal::new(false),
            notifier,
        }
    }

    pub fn is_edit_mode(&self) -> impl Fn() -> bool + '_ {
        move || self.form.with(|f| f.id.is_some())
    }

    /// Edits always start from the server copy, not the table row
    pub fn load_if_needed(&self, id: Option<RecordId>) {
        let Some(id) = id else {
            return;
        };
        let form = self.form;
        let loading = self.loading;
        let notifier = self.notifier.clone();
        loading.set(true);
        spawn_local(async move {
            match model::fetch_by_id(id).await {
                Ok(client) => {
                    let _ = form.try_set(client);
                }
                Err(e) => notifier.api_error(&e),
            }
            let _ = loading.try_set(false);
        });
    }

    pub fn update(&self, apply: impl FnOnce(&mut Client)) {
        self.form.update(apply);
        if !self.errors.with_untracked(FieldErrors::is_empty) {
            let errors = self.form.with_untracked(|f| f.validate().err().unwrap_or_default());
            self.errors.set(errors);
        }
    }

    /// Validates, then POST/PUT. The dialog stays open on failure.
    pub fn save_command(&self, on_saved: Rc<dyn Fn(())>) {
        let current = self.form.get_untracked();
        if let Err(errors) = current.validate() {
            self.errors.set(errors);
            return;
        }
        self.errors.set(FieldErrors::new());

        let saving = self.saving;
        let notifier = self.notifier.clone();
        saving.set(true);
        spawn_local(async move {
            let is_new = current.id.is_none();
            match model::save(&current).await {
                Ok(()) => {
                    notifier.success(if is_new { "Cliente creado" } else { "Cliente actualizado" });
                    (on_saved)(());
                }
                Err(e) => notifier.api_error(&e),
            }
            let _ = saving.try_set(false);
        });
    }
}
