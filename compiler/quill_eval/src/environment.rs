//! Scope frames, the global registry, and output sinks.
//!
//! Name resolution searches the frame stack innermost first, then the
//! global registry. Frames are `Shared` so `sys.locals` can hand out the
//! live frame as a map value.

use rustc_hash::FxHashMap;
use tracing::{debug, warn};

use quill_ir::StmtList;

use crate::errors::{undefined_variable, EvalResult};
use crate::exec::execute;
use crate::host::{HostObject, LenFunction, NativeFunction, SysObject};
use crate::output::{Channel, OutputSink};
use crate::shared::Shared;
use crate::value::{Bindings, Value};

/// What [`Environment::write`] did with a value.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WriteOutcome {
    /// Rebound an existing name in the frame that holds it.
    Updated,
    /// Created the name in the innermost frame.
    Created,
    /// The name is a global only. Globals are not writable from scripts, so
    /// the value was dropped.
    GlobalIgnored,
}

/// Evaluation state for one script session.
pub struct Environment {
    /// Frame stack, innermost last. Never empty.
    frames: Vec<Shared<Bindings>>,
    /// Outermost frame, kept as a fallback for the frame stack.
    base: Shared<Bindings>,
    globals: FxHashMap<String, Value>,
    sinks: Vec<Box<dyn OutputSink>>,
}

impl Environment {
    /// Create an environment with one empty frame and the built-in
    /// globals `sys` and `len`.
    pub fn new() -> Self {
        Self::with_frames(Vec::new())
    }

    /// Create an environment from pre-seeded frames, outermost first.
    pub fn with_frames(frames: Vec<Bindings>) -> Self {
        let mut frames: Vec<_> = frames.into_iter().map(Shared::new).collect();
        if frames.is_empty() {
            frames.push(Shared::default());
        }
        let base = frames[0].clone();
        let mut env = Environment {
            frames,
            base,
            globals: FxHashMap::default(),
            sinks: Vec::new(),
        };
        env.register_host("sys", SysObject);
        env.register_host("len", LenFunction);
        env
    }

    /// Number of frames on the stack.
    pub fn depth(&self) -> usize {
        self.frames.len()
    }

    pub fn push_frame(&mut self) {
        self.frames.push(Shared::default());
        debug!(depth = self.frames.len(), "push frame");
    }

    /// Pop the innermost frame. The outermost frame is never popped.
    pub fn pop_frame(&mut self) {
        if self.frames.len() > 1 {
            self.frames.pop();
            debug!(depth = self.frames.len(), "pop frame");
        } else {
            warn!("attempted to pop the outermost frame");
        }
    }

    /// Frames, outermost first.
    pub fn frames(&self) -> &[Shared<Bindings>] {
        &self.frames
    }

    /// Handle to the innermost frame.
    pub fn current_frame(&self) -> Shared<Bindings> {
        self.innermost().clone()
    }

    fn innermost(&self) -> &Shared<Bindings> {
        self.frames.last().unwrap_or(&self.base)
    }

    /// Resolve a name, innermost frame first, then globals.
    pub fn lookup(&self, name: &str) -> Option<Value> {
        self.frames
            .iter()
            .rev()
            .find_map(|frame| frame.borrow().get(name).cloned())
            .or_else(|| self.globals.get(name).cloned())
    }

    /// Resolve a name or fail with `undefined variable`.
    pub fn read(&self, name: &str) -> EvalResult {
        self.lookup(name).ok_or_else(|| undefined_variable(name))
    }

    /// Bind `name` in the nearest frame that has it, or create it in the
    /// innermost frame. Names that exist only as globals are left alone.
    pub fn write(&mut self, name: &str, value: Value) -> WriteOutcome {
        for frame in self.frames.iter().rev() {
            let mut frame = frame.borrow_mut();
            if let Some(slot) = frame.get_mut(name) {
                *slot = value;
                return WriteOutcome::Updated;
            }
        }
        if self.globals.contains_key(name) {
            debug!(name, "ignored write to global");
            return WriteOutcome::GlobalIgnored;
        }
        self.set_local(name, value);
        WriteOutcome::Created
    }

    /// Bind `name` in the innermost frame, shadowing outer bindings.
    pub fn set_local(&mut self, name: &str, value: Value) {
        self.innermost()
            .borrow_mut()
            .insert(name.to_string(), value);
    }

    /// Look up a registered global.
    pub fn global(&self, name: &str) -> Option<&Value> {
        self.globals.get(name)
    }

    pub fn register_global(&mut self, name: impl Into<String>, value: impl Into<Value>) {
        self.globals.insert(name.into(), value.into());
    }

    pub fn register_host(&mut self, name: impl Into<String>, object: impl HostObject + 'static) {
        self.register_global(name, Value::host(object));
    }

    /// Register a Rust closure as a callable global.
    pub fn register_function(
        &mut self,
        name: impl Into<String>,
        arity: Option<usize>,
        func: impl Fn(&[Value]) -> EvalResult + 'static,
    ) {
        let name = name.into();
        let function = NativeFunction::new(name.clone(), arity, func);
        self.register_host(name, function);
    }

    pub fn register_output_sink(&mut self, sink: impl OutputSink + 'static) {
        self.sinks.push(Box::new(sink));
    }

    /// Send a value to every registered sink.
    pub fn emit(&self, channel: Channel, value: &Value) {
        for sink in &self.sinks {
            sink.emit(channel, value);
        }
    }

    /// Run a program. A runtime fault stops the program and is reported on
    /// the error channel as `line <n>: <message>`; it is not returned.
    /// Effects of statements before the fault remain.
    pub fn evaluate(&mut self, program: &StmtList) {
        if let Err(err) = execute(program, self) {
            debug!(%err, "evaluation fault");
            self.emit(Channel::Error, &Value::Str(err.to_string()));
        }
    }
}

impl Default for Environment {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests;
