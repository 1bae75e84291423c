use std::sync::Arc;

use dioxus::prelude::*;

use crate::app::context::RegistryContext;
use crate::components::display::{ErrorState, ToastDisplay};
use crate::components::forms::{
    AddDonorDialog, DeleteConfirmationDialog, EditDonorDialog, LoginForm, PostCallDialog,
};
use crate::components::layout::{SectionGrid, SectionHeader};
use crate::components::tables::{
    AppointedDonorsList, BloodRequirementForm, DonorTable, PermanentRejectedDonorsList,
    TempRejectedDonorsList,
};
use crate::features::donors::{DialogState, RegistryAction, RegistryState, Section};
use crate::services::client::{
    ClientResult, DonorBackend, HttpDonorBackend, InMemoryDonorBackend, OperatorIdentity,
    SessionManager,
};
use crate::services::config::{BackendMode, RegistryConfig};
use crate::services::queries::{DonorQueries, QueryCache};
use crate::{console_error, console_info};

const DONOR_REGISTRY_CSS: Asset = asset!("/assets/styling/donor_registry.css");

/// Data-access layer for the signed-in operator
fn build_queries(config: &RegistryConfig, identity: &OperatorIdentity) -> ClientResult<DonorQueries> {
    let backend: Arc<dyn DonorBackend> = match config.backend {
        BackendMode::Http => Arc::new(HttpDonorBackend::new(
            &config.backend_url,
            &identity.principal,
            &config.user_agent,
        )?),
        BackendMode::Memory => Arc::new(InMemoryDonorBackend::new()),
    };
    Ok(DonorQueries::new(
        backend,
        QueryCache::new(config.cache_capacity),
    ))
}

#[component]
pub fn DonorRegistry() -> Element {
    let config = use_hook(RegistryConfig::load);
    let session = use_hook(SessionManager::default);

    let mut state = use_signal({
        let session = session.clone();
        move || RegistryState::with_identity(session.get_identity())
    });

    // Dispatch function for actions - using in-place reduction to preserve Dioxus Signal reactivity
    let dispatch = EventHandler::new(move |action: RegistryAction| {
        state.with_mut(|s| s.reduce_in_place(action));
    });

    let identity = state.read().identity.clone();

    rsx! {
        document::Link { rel: "stylesheet", href: DONOR_REGISTRY_CSS }

        div {
            class: "registry-container",
            {match identity {
                None => rsx! {
                    LoginForm { session: session.clone(), dispatch }
                },
                Some(identity) => rsx! {
                    Dashboard {
                        key: "{identity.principal}",
                        config: config.clone(),
                        identity,
                        session: session.clone(),
                        state,
                        dispatch,
                    }
                },
            }}
        }
    }
}

#[derive(Props, PartialEq, Clone)]
struct DashboardProps {
    config: RegistryConfig,
    identity: OperatorIdentity,
    session: SessionManager,
    state: Signal<RegistryState>,
    dispatch: EventHandler<RegistryAction>,
}

/// Everything behind the auth gate. Keyed by principal, so a new operator
/// gets a fresh backend and an empty cache.
#[component]
fn Dashboard(props: DashboardProps) -> Element {
    let queries = use_hook(|| {
        build_queries(&props.config, &props.identity).inspect_err(|e| {
            console_error!("[Registry] Could not create the donor backend: {}", e);
        })
    });

    match queries {
        Ok(queries) => rsx! {
            Workspace {
                queries,
                config: props.config.clone(),
                identity: props.identity.clone(),
                session: props.session.clone(),
                state: props.state,
                dispatch: props.dispatch,
            }
        },
        Err(e) => rsx! {
            ErrorState {
                title: "Donor service unavailable".to_string(),
                message: e.user_message(),
            }
        },
    }
}

#[derive(Props, PartialEq, Clone)]
struct WorkspaceProps {
    queries: DonorQueries,
    config: RegistryConfig,
    identity: OperatorIdentity,
    session: SessionManager,
    state: Signal<RegistryState>,
    dispatch: EventHandler<RegistryAction>,
}

#[component]
fn Workspace(props: WorkspaceProps) -> Element {
    let state = props.state;
    let dispatch = props.dispatch;
    let epoch = use_signal(|| 0u64);

    use_context_provider(|| RegistryContext {
        queries: props.queries.clone(),
        config: props.config.clone(),
        state,
        dispatch,
        epoch,
    });

    let session = props.session.clone();
    let on_sign_out = move |_| {
        session.clear();
        console_info!("[Auth] Signed out");
        dispatch.call(RegistryAction::SignOut);
    };

    let active_section = state.read().active_section;
    let dialog = state.read().dialog.clone();

    rsx! {
        header {
            class: "registry-header",
            h1 { class: "registry-title", "Blood Donor Registry" }
            div {
                class: "operator",
                span { class: "operator-principal", "{props.identity.principal}" }
                button { class: "secondary-button", onclick: on_sign_out, "Sign Out" }
            }
        }

        main {
            class: "registry-main",
            {match active_section {
                None => rsx! { SectionGrid { dispatch } },
                Some(section) => rsx! { SectionView { section, dispatch } },
            }}
        }

        {match dialog {
            DialogState::None => rsx! {},
            DialogState::AddDonor => rsx! { AddDonorDialog {} },
            DialogState::EditDonor(donor) => rsx! { EditDonorDialog { donor } },
            DialogState::DeleteDonor(donor) => rsx! { DeleteConfirmationDialog { donor } },
            DialogState::PostCall(donor) => rsx! {
                PostCallDialog { key: "{donor.id}", donor }
            },
        }}

        ToastDisplay {}
    }
}

#[derive(Props, PartialEq, Clone)]
struct SectionViewProps {
    section: Section,
    dispatch: EventHandler<RegistryAction>,
}

#[component]
fn SectionView(props: SectionViewProps) -> Element {
    let dispatch = props.dispatch;
    let section = props.section;

    let action = match section {
        Section::TotalDonors => Some(rsx! {
            button {
                class: "primary-button",
                onclick: move |_| dispatch.call(RegistryAction::OpenAddDonor),
                "+ Add Donor"
            }
        }),
        _ => None,
    };

    rsx! {
        SectionHeader { section, dispatch, action }
        div {
            class: "section-body",
            {match section {
                Section::TotalDonors => rsx! { DonorTable {} },
                Section::BloodRequirement => rsx! { BloodRequirementForm {} },
                Section::Appointed => rsx! { AppointedDonorsList {} },
                Section::TempRejected => rsx! { TempRejectedDonorsList {} },
                Section::PermRejected => rsx! { PermanentRejectedDonorsList {} },
            }}
        }
    }
}
