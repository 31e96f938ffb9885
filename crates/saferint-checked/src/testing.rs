// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

//! Test helpers: an error policy that records instead of reporting, and an
//! in-memory diagnostic sink.

use crate::diagnostics::DebugContext;
use crate::policy::error::ErrorPolicy;
use parking_lot::{Mutex, MutexGuard};
use std::cell::RefCell;
use std::io::{self, Write};
use std::sync::Arc;

thread_local! {
    static RECORDED: RefCell<Vec<DebugContext>> = const { RefCell::new(Vec::new()) };
}

/// Records every context on the current thread.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
pub(crate) struct RecordingPolicy;

impl ErrorPolicy for RecordingPolicy {
    fn handle(context: DebugContext) {
        RECORDED.with(|recorded| recorded.borrow_mut().push(context));
    }
}

/// Drains the contexts recorded on the current thread.
pub(crate) fn take_recorded() -> Vec<DebugContext> {
    RECORDED.with(|recorded| std::mem::take(&mut *recorded.borrow_mut()))
}

/// A cloneable in-memory sink.
#[derive(Clone, Default)]
pub(crate) struct SharedBuffer(Arc<Mutex<Vec<u8>>>);

impl SharedBuffer {
    pub(crate) fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.lock()).into_owned()
    }
}

impl Write for SharedBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

static SINK_LOCK: Mutex<()> = parking_lot::const_mutex(());

/// Serializes tests that replace the process-wide diagnostic sink.
pub(crate) fn sink_lock() -> MutexGuard<'static, ()> {
    SINK_LOCK.lock()
}
