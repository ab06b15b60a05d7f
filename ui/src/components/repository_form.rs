use api::RepositoryFormValues;
use dioxus::prelude::*;

use crate::t;

/// Raw text of the form inputs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormFields {
    pub address: String,
    pub branch: String,
    pub git_user_name: String,
    pub git_password: String,
    pub email: String,
}

impl FormFields {
    /// Normalized values, or `None` when the address is blank.
    pub fn values(&self) -> Option<RepositoryFormValues> {
        collect_values(
            &self.address,
            &self.branch,
            &self.git_user_name,
            &self.git_password,
            &self.email,
        )
    }

    /// Hand the values over and clear every field. Invalid input is kept so
    /// it can be corrected.
    pub fn take_values(&mut self) -> Option<RepositoryFormValues> {
        let values = self.values()?;
        *self = FormFields::default();
        Some(values)
    }
}

/// Modal form for adding a repository.
///
/// `on_submit` receives normalized values and is only called when an address
/// is present. `submitting` disables the form while the caller awaits the call.
/// Fields are cleared on cancel and once values are handed over.
#[component]
pub fn RepositoryForm(
    open: bool,
    submitting: bool,
    on_cancel: EventHandler<()>,
    on_submit: EventHandler<RepositoryFormValues>,
) -> Element {
    let mut fields = use_signal(FormFields::default);
    let mut address_error = use_signal(|| false);

    if !open {
        return rsx! {};
    }

    let submit = move |evt: FormEvent| {
        evt.prevent_default();
        let taken = fields.write().take_values();
        match taken {
            Some(values) => {
                address_error.set(false);
                on_submit.call(values);
            }
            None => address_error.set(true),
        }
    };

    let mut cancel = move || {
        fields.set(FormFields::default());
        address_error.set(false);
        on_cancel.call(());
    };

    let current = fields();

    rsx! {
        div { class: "modal-backdrop", onclick: move |_| cancel(),
            div {
                class: "modal",
                role: "dialog",
                aria_modal: "true",
                onclick: move |evt| evt.stop_propagation(),

                header { class: "modal__header",
                    h2 { {t!("form-title")} }
                }

                form { class: "modal__body repo-form", onsubmit: submit,
                    label { class: "field",
                        span { class: "field__label", {t!("form-address-label")} }
                        input {
                            class: "input",
                            r#type: "url",
                            name: "address",
                            placeholder: t!("form-address-placeholder"),
                            value: "{current.address}",
                            disabled: submitting,
                            oninput: move |evt| fields.write().address = evt.value(),
                        }
                        if address_error() {
                            span { class: "field__error", {t!("form-address-required")} }
                        }
                    }

                    label { class: "field",
                        span { class: "field__label", {t!("form-branch-label")} }
                        input {
                            class: "input",
                            name: "branch",
                            placeholder: t!("form-branch-placeholder"),
                            value: "{current.branch}",
                            disabled: submitting,
                            oninput: move |evt| fields.write().branch = evt.value(),
                        }
                    }

                    p { class: "field__hint", {t!("form-private-hint")} }

                    div { class: "field-row",
                        label { class: "field",
                            span { class: "field__label", {t!("form-git-user-label")} }
                            input {
                                class: "input",
                                name: "gitUserName",
                                autocomplete: "username",
                                value: "{current.git_user_name}",
                                disabled: submitting,
                                oninput: move |evt| fields.write().git_user_name = evt.value(),
                            }
                        }
                        label { class: "field",
                            span { class: "field__label", {t!("form-git-password-label")} }
                            input {
                                class: "input",
                                r#type: "password",
                                name: "gitPassword",
                                autocomplete: "current-password",
                                value: "{current.git_password}",
                                disabled: submitting,
                                oninput: move |evt| fields.write().git_password = evt.value(),
                            }
                        }
                    }

                    label { class: "field",
                        span { class: "field__label", {t!("form-email-label")} }
                        input {
                            class: "input",
                            r#type: "email",
                            name: "email",
                            value: "{current.email}",
                            disabled: submitting,
                            oninput: move |evt| fields.write().email = evt.value(),
                        }
                    }

                    footer { class: "modal__footer",
                        button {
                            r#type: "button",
                            class: "button button--ghost",
                            onclick: move |_| cancel(),
                            {t!("form-cancel")}
                        }
                        button {
                            r#type: "submit",
                            class: "button button--primary",
                            disabled: submitting,
                            if submitting {
                                {t!("form-submitting")}
                            } else {
                                {t!("form-submit")}
                            }
                        }
                    }
                }
            }
        }
    }
}

/// Build normalized form values; `None` when the address is blank.
pub fn collect_values(
    address: &str,
    branch: &str,
    git_user_name: &str,
    git_password: &str,
    email: &str,
) -> Option<RepositoryFormValues> {
    let values = RepositoryFormValues {
        address: address.to_string(),
        branch: Some(branch.to_string()),
        git_user_name: Some(git_user_name.to_string()),
        git_password: Some(git_password.to_string()),
        email: Some(email.to_string()),
    }
    .normalized();

    (!values.address.is_empty()).then_some(values)
}
