//! Tracing wrappers that report every predicate evaluation.
use std::fmt::Debug;

use tracing::trace;

use crate::{predicate1::Predicate1, predicate2::Predicate2};

/// Wraps a one-argument predicate so that each evaluation emits a `TRACE` event with the
/// predicate's `name`, its input and its result.
pub fn traced1<T1: Debug + ?Sized>(
    name: &'static str,
    p: impl Predicate1<T1>,
) -> impl for<'a> Fn(&'a T1) -> bool {
    move |t1| {
        let result = Predicate1::test(&p, t1);
        trace!(predicate = name, input = ?t1, %result, "evaluated predicate");
        result
    }
}

/// Wraps a two-argument predicate so that each evaluation emits a `TRACE` event with the
/// predicate's `name`, its inputs and its result.
pub fn traced2<T1: Debug + ?Sized, T2: Debug + ?Sized>(
    name: &'static str,
    p: impl Predicate2<T1, T2>,
) -> impl for<'a, 'b> Fn(&'a T1, &'b T2) -> bool {
    move |t1, t2| {
        let result = Predicate2::test(&p, t1, t2);
        trace!(predicate = name, first = ?t1, second = ?t2, %result, "evaluated predicate");
        result
    }
}

#[cfg(test)]
mod tests {
    use std::{
        io,
        sync::{Arc, Mutex},
    };

    use tracing::Level;
    use tracing_subscriber::EnvFilter;

    use super::*;

    fn init_tracing() {
        let filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("predicate=trace"));
        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .try_init();
    }

    /// Collects everything the fmt subscriber writes so tests can inspect emitted events.
    #[derive(Clone, Default)]
    struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

    impl io::Write for CapturedLogs {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    impl CapturedLogs {
        fn contents(&self) -> String {
            String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
        }
    }

    fn capture(f: impl FnOnce()) -> String {
        let logs = CapturedLogs::default();
        let writer = logs.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(Level::TRACE)
            .with_ansi(false)
            .with_writer(move || writer.clone())
            .finish();

        tracing::subscriber::with_default(subscriber, f);
        logs.contents()
    }

    #[test]
    fn test_traced1_preserves_result() {
        init_tracing();
        let short = traced1("short", |s: &str| s.len() < 4);

        assert!(short("tea"));
        assert!(!short("coffee"));
    }

    #[test]
    fn test_traced2_preserves_result() {
        init_tracing();
        let divides = traced2("divides", |d: &u32, n: &u32| *d != 0 && n.is_multiple_of(*d));

        assert!(divides(&3, &9));
        assert!(!divides(&0, &9));
        assert!(!divides(&2, &9));
    }

    #[test]
    fn test_traced_constant() {
        init_tracing();
        let always = traced1("always", crate::predicate1::constantly(true));

        assert!(always(&[0u8; 4][..]));
    }

    #[test]
    fn test_traced1_event_fields() {
        let output = capture(|| {
            let short = traced1("short", |s: &str| s.len() < 4);
            assert!(short("tea"));
        });

        assert!(output.contains("TRACE"), "{output}");
        assert!(output.contains("evaluated predicate"), "{output}");
        assert!(
            output.contains(r#"predicate="short" input="tea" result=true"#),
            "{output}"
        );
    }

    #[test]
    fn test_traced2_event_fields() {
        let output = capture(|| {
            let lt = traced2("lt", |a: &u32, b: &u32| a < b);
            assert!(!lt(&5, &1));
        });

        assert!(
            output.contains(r#"predicate="lt" first=5 second=1 result=false"#),
            "{output}"
        );
    }
}
