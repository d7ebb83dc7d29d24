//! The Application Lifecycle Manager.
//!
//! Owns the application state machine, validates every requested status
//! change against the explicit transition table, and fans out the
//! submission notifications through the injected dispatcher.

use std::sync::Arc;

use chrono::Utc;
use dashmap::DashMap;
use tokio::sync::Mutex;
use tracing::info;

use grantflow_core::error::AppError;
use grantflow_core::types::{ApplicationId, ProgramId};
use grantflow_entity::application::{Application, ApplicationStatus};
use grantflow_entity::notification::NotificationKind;
use grantflow_entity::program::Program;
use grantflow_store::{ApplicationStore, ProgramStore};

use crate::context::RequestContext;
use crate::notification::NotificationDispatcher;

/// Manages the application state machine and its notification fan-out.
#[derive(Clone)]
pub struct LifecycleService {
    /// Application store.
    applications: Arc<dyn ApplicationStore>,
    /// Program store, for resolving the owner and title on submission.
    programs: Arc<dyn ProgramStore>,
    /// Dispatcher for the submission fan-out.
    dispatcher: NotificationDispatcher,
    /// Per-application locks serializing concurrent transitions.
    ///
    /// Two simultaneous submit requests must produce exactly one pair of
    /// notifications; the lock is held across the read-modify-write.
    locks: Arc<DashMap<ApplicationId, Arc<Mutex<()>>>>,
}

impl LifecycleService {
    /// Creates a new lifecycle service.
    pub fn new(
        applications: Arc<dyn ApplicationStore>,
        programs: Arc<dyn ProgramStore>,
        dispatcher: NotificationDispatcher,
    ) -> Self {
        Self {
            applications,
            programs,
            dispatcher,
            locks: Arc::new(DashMap::new()),
        }
    }

    /// Creates a new application in `Draft` for the current user's company.
    pub async fn create_application(
        &self,
        ctx: &RequestContext,
        program_id: ProgramId,
        answers: serde_json::Value,
    ) -> Result<Application, AppError> {
        self.load_program(program_id).await?;

        let application = self
            .applications
            .create(Application::new_draft(program_id, ctx.user_id, answers))
            .await?;

        info!(
            user_id = %ctx.user_id,
            application_id = %application.id,
            program_id = %program_id,
            "Application created"
        );

        Ok(application)
    }

    /// Gets an application by id.
    pub async fn get_application(
        &self,
        application_id: ApplicationId,
    ) -> Result<Application, AppError> {
        self.applications
            .find_by_id(application_id)
            .await?
            .ok_or_else(|| {
                AppError::not_found(format!("Application {application_id} does not exist"))
            })
    }

    /// Lists the current user's applications, newest first.
    pub async fn list_applications(
        &self,
        ctx: &RequestContext,
    ) -> Result<Vec<Application>, AppError> {
        self.applications.find_by_company(ctx.user_id).await
    }

    /// Transitions an application to `requested` and/or applies a field
    /// patch.
    ///
    /// A requested status equal to the current one is a plain field update.
    /// Any status change not in the transition table fails with
    /// `InvalidTransition` and leaves the record unmodified. The first
    /// successful transition to `Submitted` sets `submitted_at` and emits
    /// exactly two notifications: `APPLICATION_STATUS` to the applicant
    /// company and `NEW_APPLICATION` to the program owner. Repeat calls
    /// never duplicate the pair.
    pub async fn transition(
        &self,
        ctx: &RequestContext,
        application_id: ApplicationId,
        requested: ApplicationStatus,
        patch: Option<serde_json::Value>,
    ) -> Result<Application, AppError> {
        // Serialize transitions per application id. The map guard must not
        // be held while awaiting the lock.
        let lock = {
            let entry = self.locks.entry(application_id).or_default();
            Arc::clone(entry.value())
        };
        let _guard = lock.lock().await;

        let mut application = self.get_application(application_id).await?;
        let previous = application.status;

        if requested != previous && !previous.can_transition_to(requested) {
            return Err(AppError::invalid_transition(format!(
                "Cannot transition application {application_id} from {previous} to {requested}"
            )));
        }

        if let Some(patch) = patch {
            apply_patch(&mut application.answers, patch);
        }

        application.status = requested;

        let first_submission = requested == ApplicationStatus::Submitted
            && previous != ApplicationStatus::Submitted
            && application.submitted_at.is_none();
        if first_submission {
            application.submitted_at = Some(Utc::now());
        }

        application.updated_at = Utc::now();
        let application = self.applications.update(application).await?;

        if first_submission {
            let program = self.load_program(application.program_id).await?;
            self.notify_submission(&application, &program).await?;
        }

        info!(
            user_id = %ctx.user_id,
            application_id = %application_id,
            from = %previous,
            to = %requested,
            "Application transitioned"
        );

        Ok(application)
    }

    /// Emits the submission pair: one notification to the applicant
    /// company, one to the program owner. Recipients come from the actual
    /// application and program records, never from fixed ids.
    async fn notify_submission(
        &self,
        application: &Application,
        program: &Program,
    ) -> Result<(), AppError> {
        let payload = serde_json::json!({
            "application_id": application.id,
            "program_id": program.id,
        });

        self.dispatcher
            .notify(
                application.company_id,
                NotificationKind::ApplicationStatus,
                "Application submitted",
                format!("Your application to \"{}\" was submitted", program.title),
                payload.clone(),
            )
            .await?;

        self.dispatcher
            .notify(
                program.owner_id,
                NotificationKind::NewApplication,
                "New application",
                format!("A new application arrived for \"{}\"", program.title),
                payload,
            )
            .await?;

        Ok(())
    }

    async fn load_program(&self, program_id: ProgramId) -> Result<Program, AppError> {
        self.programs
            .find_by_id(program_id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Program {program_id} does not exist")))
    }
}

/// Merge a partial-field patch into the application answers.
///
/// Objects merge key by key at the top level; any other shape replaces the
/// previous value wholesale.
fn apply_patch(answers: &mut serde_json::Value, patch: serde_json::Value) {
    match (answers.as_object_mut(), patch) {
        (Some(target), serde_json::Value::Object(fields)) => {
            for (key, value) in fields {
                target.insert(key, value);
            }
        }
        (_, patch) => *answers = patch,
    }
}
