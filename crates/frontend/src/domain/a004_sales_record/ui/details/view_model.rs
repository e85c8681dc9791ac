use super::model;
use contracts::domain::a004_sales_record::aggregate::SalesRecord;
use contracts::domain::common::{FieldErrors, Validate};
use contracts::enums::retail_chain::RetailChain;
use leptos::prelude::*;
use leptos::task::spawn_local;
use std::rc::Rc;

use crate::shared::toast::NotifierHandle;

#[derive(Clone)]
pub struct SalesRecordDetailsViewModel {
    pub chain: RetailChain,
    pub form: RwSignal<SalesRecord>,
    pub errors: RwSignal<FieldErrors>,
    pub saving: RwSignal<bool>,
    notifier: NotifierHandle,
}

impl SalesRecordDetailsViewModel {
    pub fn new(chain: RetailChain, initial: SalesRecord, notifier: NotifierHandle) -> Self {
        Self {
            chain,
            form: RwSignal::new(initial),
            errors: RwSignal::new(FieldErrors::new()),
            saving: RwSignal::new(false),
            notifier,
        }
    }

    pub fn update(&self, apply: impl FnOnce(&mut SalesRecord)) {
        self.form.update(apply);
        if !self.errors.with_untracked(FieldErrors::is_empty) {
            let errors = self.form.with_untracked(|f| f.validate().err().unwrap_or_default());
            self.errors.set(errors);
        }
    }

    pub fn save_command(&self, on_saved: Rc<dyn Fn(())>) {
        let mut current = self.form.get_untracked();
        if let Err(errors) = current.validate() {
            self.errors.set(errors);
            return;
        }
        self.errors.set(FieldErrors::new());
        if let Some(code) = model::pinned_client(self.chain) {
            current.assign_client(code);
        }

        let chain = self.chain;
        let saving = self.saving;
        let notifier = self.notifier.clone();
        saving.set(true);
        spawn_local(async move {
            match model::update(chain, &current).await {
                Ok(()) => {
                    notifier.success("Venta actualizada correctamente");
                    (on_saved)(());
                }
                Err(e) => notifier.api_error(&e),
            }
            let _ = saving.try_set(false);
        });
    }
}
