//! fleet9s - A K9s-inspired terminal UI for clusterfleet resources
//!
//! Browses Applications, their manifests and per-cluster status, Clusters
//! and ManifestWorks, either live from the hub cluster or from a YAML
//! snapshot.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use fleet9s::aggregate::{RequestContext, cancel_pair};
use fleet9s::cli::{ConfigSubcommand, display_version, handle_config_command, init_logging};
use fleet9s::config::{Config, ConfigLoader};
use fleet9s::services::{FleetService, FleetView};
use fleet9s::store::{FileStore, NamespaceScope, ResourceStore, join_fqn};
use std::path::PathBuf;
use std::sync::Arc;

/// fleet9s - A K9s-inspired terminal UI for clusterfleet resources
#[derive(Parser, Debug)]
#[command(name = "fleet9s")]
#[command(about = "A K9s-inspired terminal UI for clusterfleet resources", long_about = None)]
struct Args {
    /// Enable debug logging
    #[arg(long, short = 'd', global = true)]
    debug: bool,

    /// Read resources from a YAML snapshot instead of the cluster
    #[arg(long, short = 'f', global = true)]
    file: Option<PathBuf>,

    /// Kubeconfig context of the hub cluster
    #[arg(long, global = true)]
    context: Option<String>,

    /// Namespace to show ("all" for every namespace)
    #[arg(long, short = 'n', global = true)]
    namespace: Option<String>,

    /// Show every namespace
    #[arg(long, short = 'A', global = true, conflicts_with = "namespace")]
    all_namespaces: bool,

    /// Label selector, e.g. "team=edge,tier!=canary"
    #[arg(long, short = 'l', global = true)]
    selector: Option<String>,

    #[command(subcommand)]
    command: Option<Command>,
}

/// Main commands
#[derive(Subcommand, Debug)]
enum Command {
    /// Configuration management
    Config {
        #[command(subcommand)]
        subcommand: ConfigSubcommand,
    },
    /// Show version information
    Version,
    /// List applications
    Apps,
    /// List clusters
    Clusters,
    /// List manifest works
    Works,
    /// Show the workload manifests of an application
    Manifests {
        /// Application as namespace/name, or name with --namespace
        app: String,
    },
    /// Show the per-cluster status of an application
    Status {
        /// Application as namespace/name, or name with --namespace
        app: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    match args.command {
        Some(Command::Config { subcommand }) => return handle_config_command(subcommand).await,
        Some(Command::Version) => {
            display_version();
            return Ok(());
        }
        _ => {}
    }

    // Initialize logging if debug flag is set
    let log_file = init_logging(args.debug);
    if let Some(ref log_path) = log_file {
        eprintln!(
            "Debug logging enabled. Logs written to: {}",
            log_path.display()
        );
    }

    let config = ConfigLoader::load().unwrap_or_else(|e| {
        eprintln!("Failed to load configuration: {:#}, using defaults", e);
        Config::default()
    });
    tracing::debug!("Configuration loaded: {:?}", config);

    let scope = if args.all_namespaces {
        NamespaceScope::All
    } else {
        NamespaceScope::from_value(args.namespace.as_deref().unwrap_or(&config.default_namespace))
    };
    let labels = args.selector.clone().or_else(|| config.label_selector.clone());

    let (store, context) = open_store(&args).await?;
    let service = Arc::new(
        FleetService::new(store, config.api_group_version())
            .with_clusters_width(config.ui.clusters_column_width),
    );

    let mut ctx = RequestContext::new().with_scope(scope.clone());
    if let Some(labels) = &labels {
        ctx = ctx.with_labels(labels.clone());
    }

    tracing::debug!("Reading fleet resources from {}", context);

    #[cfg(feature = "tui")]
    if args.command.is_none() {
        let theme = fleet9s::tui::Theme::from_config(&config.ui);
        let app = fleet9s::tui::App::new(context, service.source(), scope, labels, config, theme);
        return fleet9s::tui::run_tui(service, app).await;
    }

    let (view, app) = match args.command {
        Some(Command::Apps) | None => (FleetView::Applications, None),
        Some(Command::Clusters) => (FleetView::Clusters, None),
        Some(Command::Works) => (FleetView::ManifestWorks, None),
        Some(Command::Manifests { app }) => (FleetView::Manifests, Some(app)),
        Some(Command::Status { app }) => (FleetView::ApplicationStatus, Some(app)),
        Some(Command::Config { .. } | Command::Version) => return Ok(()),
    };

    if let Some(app) = app {
        ctx = ctx.with_path(qualify(&app, &scope)?);
    }

    // Ctrl-C abandons the request in flight
    let (handle, signal) = cancel_pair();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            handle.cancel();
        }
    });
    let ctx = ctx.with_cancel(signal);

    let table = service
        .table(view, &ctx)
        .await
        .with_context(|| format!("Failed to fetch {}", view))?;
    fleet9s::cli::print_table(&table);

    Ok(())
}

/// Build the store named by the arguments, with a label for the header
async fn open_store(args: &Args) -> Result<(Arc<dyn ResourceStore>, String)> {
    if let Some(path) = &args.file {
        tracing::debug!("Loading snapshot {}", path.display());
        let store = FileStore::load(path)
            .await
            .with_context(|| format!("Failed to load snapshot {}", path.display()))?;
        return Ok((Arc::new(store), path.display().to_string()));
    }

    tracing::debug!("Initializing Kubernetes client");
    let client = fleet9s::kube::create_client(args.context.as_deref()).await?;
    let context = args
        .context
        .clone()
        .unwrap_or_else(fleet9s::kube::get_context);
    tracing::info!("Connected to Kubernetes cluster: {}", context);

    Ok((
        Arc::new(fleet9s::kube::KubeStore::new(client, context.clone())),
        context,
    ))
}

/// `namespace/name` for an application argument
fn qualify(app: &str, scope: &NamespaceScope) -> Result<String> {
    if app.contains('/') {
        return Ok(app.to_string());
    }
    match scope.namespace() {
        Some(namespace) => Ok(join_fqn(Some(namespace), app)),
        None => anyhow::bail!(
            "application {:?} needs a namespace: use namespace/name or --namespace",
            app
        ),
    }
}
