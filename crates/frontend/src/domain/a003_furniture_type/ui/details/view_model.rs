use super::model;
use contracts::domain::a003_furniture_type::aggregate::FurnitureType;
use contracts::domain::common::{FieldErrors, Validate};
use contracts::enums::retail_chain::RetailChain;
use leptos::prelude::*;
use leptos::task::spawn_local;
use std::rc::Rc;

use crate::shared::toast::NotifierHandle;

#[derive(Clone)]
pub struct FurnitureTypeDetailsViewModel {
    pub chain: RetailChain,
    pub form: RwSignal<FurnitureType>,
    pub errors: RwSignal<FieldErrors>,
    pub saving: RwSignal<bool>,
    notifier: NotifierHandle,
}

impl FurnitureTypeDetailsViewModel {
    pub fn new(chain: RetailChain, initial: Option<FurnitureType>, notifier: NotifierHandle) -> Self {
        Self {
            chain,
            form: RwSignal::new(initial.unwrap_or_default()),
            errors: RwSignal::new(FieldErrors::new()),
            saving: RwSignal::new(false),
            notifier,
        }
    }

    pub fn is_edit_mode(&self) -> impl Fn() -> bool + '_ {
        move || self.form.with(|f| f.id.is_some())
    }

    pub fn update(&self, apply: impl FnOnce(&mut FurnitureType)) {
        self.form.update(apply);
        if !self.errors.with_untracked(FieldErrors::is_empty) {
            let errors = self.form.with_untracked(|f| f.validate().err().unwrap_or_default());
            self.errors.set(errors);
        }
    }

    /// The record is always saved under the chain's client
    pub fn save_command(&self, on_saved: Rc<dyn Fn(())>) {
        let mut current = self.form.get_untracked();
        if let Err(errors) = current.validate() {
            self.errors.set(errors);
            return;
        }
        self.errors.set(FieldErrors::new());
        if let Some(code) = self.chain.client_code() {
            current.assign_client(code);
        }

        let chain = self.chain;
        let saving = self.saving;
        let notifier = self.notifier.clone();
        saving.set(true);
        spawn_local(async move {
            let is_new = current.id.is_none();
            match model::save(chain, &current).await {
                Ok(()) => {
                    notifier.success(if is_new {
                        "Tipo de mueble creado correctamente"
                    } else {
                        "Tipo de mueble actualizado correctamente"
                    });
                    (on_saved)(());
                }
                Err(e) => notifier.api_error(&e),
            }
            let _ = saving.try_set(false);
        });
    }
}
