use std::{fmt, io, sync::Arc};

use serde_json::{Map, Value};
use tracing::field::{Field, Visit};
use tracing_subscriber::{
    fmt::{self as tsfmt, format::Writer, FmtContext, FormatEvent, FormatFields, MakeWriter},
    layer::SubscriberExt,
    registry::LookupSpan,
    EnvFilter, Registry,
};

#[derive(Debug, thiserror::Error)]
pub enum ObsInitError {
    #[error("tracing subscriber already initialized")]
    AlreadyInitialized,
    #[error("failed to install tracing subscriber: {0}")]
    Install(#[from] tracing::subscriber::SetGlobalDefaultError),
}

/// Initialize observability for an application embedding the client.
pub struct ObsInit;

impl ObsInit {
    /// Install a global tracing subscriber writing JSON lines to stderr.
    pub fn init(component: &str) -> Result<(), ObsInitError> {
        let subscriber = Self::subscriber_with_writer(component, io::stderr);
        tracing::subscriber::set_global_default(subscriber).map_err(|err| {
            if tracing::dispatcher::has_been_set() {
                ObsInitError::AlreadyInitialized
            } else {
                ObsInitError::Install(err)
            }
        })
    }

    /// Build a tracing subscriber using the provided writer.
    pub fn subscriber_with_writer<W>(component: &str, writer: W) -> impl tracing::Subscriber
    where
        W: for<'writer> MakeWriter<'writer> + Send + Sync + 'static,
    {
        let fmt_layer = tsfmt::layer()
            .with_ansi(false)
            .event_format(JsonLineFormat::new(Arc::from(component)))
            .with_writer(writer);

        Registry::default().with(env_filter()).with(fmt_layer)
    }
}

/// `RUST_LOG` wins, then `LOG_LEVEL`, then a build-dependent default.
fn env_filter() -> EnvFilter {
    let env_level = std::env::var("LOG_LEVEL").unwrap_or_else(|_| {
        if cfg!(debug_assertions) {
            "debug".to_string()
        } else {
            "info".to_string()
        }
    });
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(env_level))
        .unwrap_or_else(|_| EnvFilter::new("info"))
}

struct JsonLineFormat {
    component: Arc<str>,
}

impl JsonLineFormat {
    fn new(component: Arc<str>) -> Self {
        Self { component }
    }
}

impl<S, N> FormatEvent<S, N> for JsonLineFormat
where
    S: tracing::Subscriber + for<'span> LookupSpan<'span>,
    N: for<'writer> FormatFields<'writer> + 'static,
{
    fn format_event(
        &self,
        ctx: &FmtContext<'_, S, N>,
        mut writer: Writer<'_>,
        event: &tracing::Event<'_>,
    ) -> fmt::Result {
        let metadata = event.metadata();
        let mut visitor = FieldVisitor::default();
        event.record(&mut visitor);

        let mut line = Map::new();
        line.insert(
            "level".to_string(),
            Value::from(metadata.level().as_str().to_ascii_lowercase()),
        );
        line.insert("target".to_string(), Value::from(metadata.target()));
        line.insert("component".to_string(), Value::from(&*self.component));
        match ctx.lookup_current() {
            Some(span) => line.insert("span".to_string(), Value::from(span.name())),
            None => line.insert("span".to_string(), Value::Null),
        };
        line.insert("fields".to_string(), Value::Object(visitor.fields));

        let encoded = serde_json::to_string(&Value::Object(line)).map_err(|_| fmt::Error)?;
        writeln!(writer, "{encoded}")
    }
}

#[derive(Default)]
struct FieldVisitor {
    fields: Map<String, Value>,
}

impl FieldVisitor {
    fn insert(&mut self, field: &Field, value: Value) {
        self.fields.insert(field.name().to_string(), value);
    }
}

impl Visit for FieldVisitor {
    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        self.insert(field, Value::from(format!("{value:?}")));
    }

    fn record_str(&mut self, field: &Field, value: &str) {
        self.insert(field, Value::from(value));
    }

    fn record_bool(&mut self, field: &Field, value: bool) {
        self.insert(field, Value::from(value));
    }

    fn record_i64(&mut self, field: &Field, value: i64) {
        self.insert(field, Value::from(value));
    }

    fn record_u64(&mut self, field: &Field, value: u64) {
        self.insert(field, Value::from(value));
    }

    fn record_f64(&mut self, field: &Field, value: f64) {
        // NaN and infinities have no JSON representation
        self.insert(field, Value::from(value));
    }
}
