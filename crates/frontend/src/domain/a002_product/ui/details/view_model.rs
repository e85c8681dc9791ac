use super::model;
use contracts::domain::a002_product::aggregate::Product;
use contracts::domain::common::{FieldErrors, Validate};
use leptos::prelude::*;
use leptos::task::spawn_local;
use std::rc::Rc;

use crate::shared::toast::NotifierHandle;

#[derive(Clone)]
pub struct ProductDetailsViewModel {
    pub form: RwSignal<Product>,
    pub errors: RwSignal<FieldErrors>,
    pub saving: RwSignal<bool>,
    notifier: NotifierHandle,
}

impl ProductDetailsViewModel {
    /// `initial` is a copy of the table row; edits never touch the list
    pub fn new(initial: Option<Product>, notifier: NotifierHandle) -> Self {
        Self {
            form: RwSignal::new(initial.unwrap_or_default()),
            errors: RwSignal::new(FieldErrors::new()),
            saving: RwSignal::new(false),
            notifier,
        }
    }

    pub fn is_edit_mode(&self) -> impl Fn() -> bool + '_ {
        move || self.form.with(|f| f.id.is_some())
    }

    pub fn update(&self, apply: impl FnOnce(&mut Product)) {
        self.form.update(apply);
        if !self.errors.with_untracked(FieldErrors::is_empty) {
            let errors = self.form.with_untracked(|f| f.validate().err().unwrap_or_default());
            self.errors.set(errors);
        }
    }

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
            match model::save(&current).await {
                Ok(()) => {
                    notifier.success("Producto guardado correctamente");
                    (on_saved)(());
                }
                Err(e) => notifier.api_error(&e),
            }
            let _ = saving.try_set(false);
        });
    }
}
