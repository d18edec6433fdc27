use std::alloc::{GlobalAlloc, Layout, System};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use maze_fog::core::{MazeSession, SessionConfig};
use maze_fog::term::FogLayer;
use maze_fog::types::{Direction, MazeAction};

struct CountingAlloc;

static COUNT_ENABLED: AtomicBool = AtomicBool::new(false);
static ALLOC_COUNT: AtomicUsize = AtomicUsize::new(0);

#[global_allocator]
static GLOBAL: CountingAlloc = CountingAlloc;

unsafe impl GlobalAlloc for CountingAlloc {
    unsafe fn alloc(&self, layout: Layout) -> *mut u8 {
        if COUNT_ENABLED.load(Ordering::Relaxed) {
            let _ = layout;
            ALLOC_COUNT.fetch_add(1, Ordering::Relaxed);
        }
        System.alloc(layout)
    }

    unsafe fn dealloc(&self, ptr: *mut u8, layout: Layout) {
        System.dealloc(ptr, layout)
    }

    unsafe fn realloc(&self, ptr: *mut u8, layout: Layout, new_size: usize) -> *mut u8 {
        if COUNT_ENABLED.load(Ordering::Relaxed) {
            let _ = (layout, new_size);
            ALLOC_COUNT.fetch_add(1, Ordering::Relaxed);
        }
        System.realloc(ptr, layout, new_size)
    }
}

fn with_alloc_counting<F: FnOnce()>(f: F) -> usize {
    ALLOC_COUNT.store(0, Ordering::Relaxed);
    COUNT_ENABLED.store(true, Ordering::Relaxed);
    f();
    COUNT_ENABLED.store(false, Ordering::Relaxed);
    ALLOC_COUNT.load(Ordering::Relaxed)
}

#[test]
fn core_hot_paths_do_not_allocate() {
    // Setup (outside counting) so one-time allocations don't trip the gate.
    let mut session = MazeSession::new(SessionConfig::default()).unwrap();
    let mut fog = FogLayer::new(session.maze().width(), session.maze().height());

    // Warm-up.
    session.tick(16, &mut fog);
    let _ = session.apply_action(MazeAction::Move(Direction::East));

    let allocs = with_alloc_counting(|| {
        // Blending ticks should be allocation-free.
        for _ in 0..200 {
            session.tick(16, &mut fog);
        }

        // Steps drive the visited/visible sweep and snapshot commits.
        for _ in 0..50 {
            for dir in Direction::ALL {
                let _ = session.apply_action(MazeAction::Move(dir));
                session.tick(16, &mut fog);
            }
        }
    });

    assert!(allocs == 0);
}
