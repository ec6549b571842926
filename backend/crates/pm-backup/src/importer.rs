//! Full-replace restore of a dataset into the store.
//!
//! One transaction wipes every table the dataset covers, then inserts the
//! dataset in dependency order. Any failure rolls the whole thing back.
//! Files are restored only after commit.

use crate::{BackupError, FileRestorer, ImportOptions, RestoreTarget, Result};

use pm_core::{Dataset, EntityCounts, FileRestoreReport, ImportResult, UserRecord};
use pm_db::{
    AttachmentRepository, ColumnRepository, CommentRepository, InvitationRepository,
    LabelRepository, ProjectMemberRepository, ProjectRepository, RoleRepository,
    SprintHistoryRepository, SprintRepository, SprintSettingsRepository,
    SystemSettingsRepository, TicketActivityRepository, TicketEditRepository,
    TicketLabelRepository, TicketLinkRepository, TicketRepository, TicketWatcherRepository,
    UserRepository,
};

use std::panic::Location;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use error_location::ErrorLocation;
use log::{debug, info, warn};
use sqlx::{Sqlite, SqliteConnection, SqlitePool, Transaction};
use tokio::sync::Mutex;

pub const DEFAULT_TRANSACTION_TIMEOUT: Duration = Duration::from_secs(300);

#[derive(Debug, Clone)]
pub struct Importer {
    pool: SqlitePool,
    transaction_timeout: Duration,
    restorer: FileRestorer,
    running: Arc<Mutex<()>>,
}

impl Importer {
    pub fn new(
        pool: SqlitePool,
        transaction_timeout: Duration,
        files_root: impl Into<PathBuf>,
    ) -> Self {
        Self {
            pool,
            transaction_timeout,
            restorer: FileRestorer::new(files_root),
            running: Arc::new(Mutex::new(())),
        }
    }

    pub fn transaction_timeout(&self) -> Duration {
        self.transaction_timeout
    }

    /// Replace the store's contents with `dataset`.
    ///
    /// Fails with `ImportInProgress` if this importer is already running.
    pub async fn import(&self, dataset: Dataset, options: ImportOptions) -> Result<ImportResult> {
        let _running = self
            .running
            .try_lock()
            .map_err(|_| BackupError::ImportInProgress {
                location: ErrorLocation::from(Location::caller()),
            })?;

        let dataset = Self::drop_unrestorable_avatars(dataset, &options);

        info!(
            "Import started: {} records, timeout {}s",
            dataset.counts().total(),
            self.transaction_timeout.as_secs()
        );

        let (tx, counts) = match tokio::time::timeout(
            self.transaction_timeout,
            self.stage_all(&dataset),
        )
        .await
        {
            Ok(Ok(staged)) => staged,
            Ok(Err(e)) => {
                warn!("Import rolled back: {}", e);
                return Err(e);
            }
            Err(_) => {
                warn!(
                    "Import exceeded {}s, rolled back",
                    self.transaction_timeout.as_secs()
                );
                return Err(BackupError::ImportTimeout {
                    timeout_secs: self.transaction_timeout.as_secs(),
                    location: ErrorLocation::from(Location::caller()),
                });
            }
        };

        // Outside the deadline: once COMMIT is sent, its result is the outcome.
        if let Err(e) = tx.commit().await {
            warn!("Import commit failed, rolled back: {}", e);
            return Err(e.into());
        }

        info!("Import committed: {} rows", counts.total());

        let files = match options.archive_bytes {
            Some(bytes) => {
                let targets = FileRestorer::targets(&dataset, options.export_options);
                self.restore_files(bytes, targets).await
            }
            None => FileRestoreReport::default(),
        };

        if !files.is_complete() {
            warn!("{} referenced files were not restored", files.missing_files.len());
        }

        Ok(ImportResult {
            success: true,
            counts,
            files,
        })
    }

    /// Avatars are files; with no archive to restore them from, the
    /// references would dangle.
    fn drop_unrestorable_avatars(mut dataset: Dataset, options: &ImportOptions) -> Dataset {
        if options.export_options.include_avatars && options.archive_bytes.is_none() {
            debug!("No archive bytes supplied, clearing user avatars");
            dataset.users = dataset
                .users
                .into_iter()
                .map(UserRecord::without_avatar)
                .collect();
        }
        dataset
    }

    async fn restore_files(
        &self,
        bytes: Vec<u8>,
        targets: Vec<RestoreTarget>,
    ) -> FileRestoreReport {
        let restorer = self.restorer.clone();
        let fallback = targets.clone();

        match tokio::task::spawn_blocking(move || restorer.restore(&bytes, &targets)).await {
            Ok(report) => report,
            Err(e) => {
                warn!("File restore task failed: {}", e);
                FileRestorer::all_missing(&fallback)
            }
        }
    }

    /// Every statement of the import, left uncommitted. Dropping the
    /// returned transaction rolls it back.
    async fn stage_all(
        &self,
        dataset: &Dataset,
    ) -> Result<(Transaction<'static, Sqlite>, EntityCounts)> {
        let mut tx = self.pool.begin().await?;

        Self::wipe(&mut tx).await?;

        if let Some(settings) = &dataset.system_settings {
            SystemSettingsRepository::upsert(&mut *tx, settings).await?;
        }

        let ticket_labels = Self::insert_all(&mut tx, dataset).await?;

        let mut counts = dataset.counts();
        counts.ticket_labels = ticket_labels;
        Ok((tx, counts))
    }

    /// Children before parents. System settings are left alone.
    async fn wipe(conn: &mut SqliteConnection) -> Result<()> {
        let mut removed = 0;
        removed += SprintHistoryRepository::delete_all(&mut *conn).await?;
        removed += InvitationRepository::delete_all(&mut *conn).await?;
        removed += AttachmentRepository::delete_all(&mut *conn).await?;
        removed += TicketActivityRepository::delete_all(&mut *conn).await?;
        removed += TicketEditRepository::delete_all(&mut *conn).await?;
        removed += CommentRepository::delete_all(&mut *conn).await?;
        removed += TicketWatcherRepository::delete_all(&mut *conn).await?;
        removed += TicketLinkRepository::delete_all(&mut *conn).await?;
        removed += TicketLabelRepository::delete_all(&mut *conn).await?;
        removed += TicketRepository::delete_all(&mut *conn).await?;
        removed += SprintSettingsRepository::delete_all(&mut *conn).await?;
        removed += ProjectMemberRepository::delete_all(&mut *conn).await?;
        removed += SprintRepository::delete_all(&mut *conn).await?;
        removed += LabelRepository::delete_all(&mut *conn).await?;
        removed += ColumnRepository::delete_all(&mut *conn).await?;
        removed += RoleRepository::delete_all(&mut *conn).await?;
        removed += ProjectRepository::delete_all(&mut *conn).await?;
        removed += UserRepository::delete_all(&mut *conn).await?;

        debug!("Wiped {} existing rows", removed);
        Ok(())
    }

    /// Parents before children. Returns the number of ticket-label links written.
    async fn insert_all(conn: &mut SqliteConnection, dataset: &Dataset) -> Result<usize> {
        for user in &dataset.users {
            UserRepository::insert(&mut *conn, user).await?;
        }
        for project in &dataset.projects {
            ProjectRepository::insert(&mut *conn, project).await?;
        }
        for role in &dataset.roles {
            RoleRepository::insert(&mut *conn, role).await?;
        }
        for column in &dataset.columns {
            ColumnRepository::insert(&mut *conn, column).await?;
        }
        for label in &dataset.labels {
            LabelRepository::insert(&mut *conn, label).await?;
        }
        for sprint in &dataset.sprints {
            SprintRepository::insert(&mut *conn, sprint).await?;
        }
        for member in &dataset.project_members {
            ProjectMemberRepository::insert(&mut *conn, member).await?;
        }
        for settings in &dataset.project_sprint_settings {
            SprintSettingsRepository::insert(&mut *conn, settings).await?;
        }

        let ticket_labels = Self::insert_tickets(&mut *conn, dataset).await?;

        for link in &dataset.ticket_links {
            TicketLinkRepository::insert(&mut *conn, link).await?;
        }
        for watcher in &dataset.ticket_watchers {
            TicketWatcherRepository::insert(&mut *conn, watcher).await?;
        }
        for comment in &dataset.comments {
            CommentRepository::insert(&mut *conn, comment).await?;
        }
        for edit in &dataset.ticket_edits {
            TicketEditRepository::insert(&mut *conn, edit).await?;
        }
        for activity in &dataset.ticket_activities {
            TicketActivityRepository::insert(&mut *conn, activity).await?;
        }
        for attachment in &dataset.attachments {
            AttachmentRepository::insert(&mut *conn, attachment).await?;
        }
        for entry in &dataset.ticket_sprint_history {
            SprintHistoryRepository::insert(&mut *conn, entry).await?;
        }
        for invitation in &dataset.invitations {
            InvitationRepository::insert(&mut *conn, invitation).await?;
        }

        Ok(ticket_labels)
    }

    /// Tickets may reference a parent that appears later in the list, so
    /// every row goes in detached first and parents are linked once all
    /// rows exist. Unknown label ids are skipped.
    async fn insert_tickets(conn: &mut SqliteConnection, dataset: &Dataset) -> Result<usize> {
        for ticket in &dataset.tickets {
            TicketRepository::insert_detached(&mut *conn, ticket).await?;
        }

        let mut linked = 0;
        for ticket in &dataset.tickets {
            if let Some(parent_id) = ticket.parent_ref() {
                TicketRepository::set_parent(&mut *conn, &ticket.id, parent_id).await?;
                linked += 1;
            }
        }

        let mut ticket_labels = 0;
        let mut skipped = 0;
        for ticket in &dataset.tickets {
            for label_id in &ticket.label_ids {
                if TicketLabelRepository::connect(&mut *conn, &ticket.id, label_id).await? {
                    ticket_labels += 1;
                } else {
                    skipped += 1;
                }
            }
        }

        debug!(
            "Tickets: {} inserted, {} parents linked, {} labels linked, {} label refs skipped",
            dataset.tickets.len(),
            linked,
            ticket_labels,
            skipped
        );

        Ok(ticket_labels)
    }
}
