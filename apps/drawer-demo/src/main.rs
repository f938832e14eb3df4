mod page;

use page::ConsolePage;
use std::rc::Rc;
use swipe_drawer_ui::{
    CartContents, DrawerCollaborators, DrawerConfig, DrawerElements, DrawerHost,
    DrawerVisualState, ElementId, HostEvent, TouchDispatcher, TouchEvent,
};
use web_time::{Duration, Instant};

const ROOT: ElementId = ElementId::new(1);
const BODY: ElementId = ElementId::new(2);
const PANEL: ElementId = ElementId::new(3);
const HEADER: ElementId = ElementId::new(4);
const CLOSE_BUTTON: ElementId = ElementId::new(5);
const OVERLAY: ElementId = ElementId::new(6);
const CART_ICON: ElementId = ElementId::new(7);
const ITEM_ROW: ElementId = ElementId::new(8);

/// Drives a host on a virtual clock so scenarios replay instantly.
struct Session {
    host: DrawerHost,
    page: Rc<ConsolePage>,
    touches: TouchDispatcher,
    now: Instant,
    clock_ms: u64,
}

impl Session {
    fn new(config: DrawerConfig) -> Result<Self, swipe_drawer_ui::ConfigError> {
        let page = Rc::new(ConsolePage::new(HEADER));
        let elements = DrawerElements::new(ROOT, BODY)
            .with_surface(PANEL)
            .with_drag_handle(HEADER)
            .with_close_control(CLOSE_BUTTON)
            .with_overlay(OVERLAY)
            .with_trigger(CART_ICON);
        let collaborators = DrawerCollaborators {
            classes: page.clone(),
            focus_trap: page.clone(),
            surface: page.clone(),
            scroll_region: page.clone(),
            drag_handle: Some(page.clone()),
            listeners: page.clone(),
            sections: page.clone(),
        };
        let mut host = DrawerHost::new(config, elements, collaborators)?;
        host.attach();
        Ok(Self {
            host,
            page,
            touches: TouchDispatcher::new(),
            now: Instant::now(),
            clock_ms: 0,
        })
    }

    fn advance(&mut self, millis: u64) {
        self.now += Duration::from_millis(millis);
        self.clock_ms += millis;
        while self.host.next_deadline().is_some_and(|at| at <= self.now) {
            if !self.host.tick(self.now) {
                break;
            }
        }
    }

    fn send(&mut self, event: HostEvent) {
        self.host.dispatch(event, self.now);
    }

    /// Delivers queued touches to the panel listeners in arrival order.
    fn flush_touches(&mut self) {
        let host = &mut self.host;
        let now = self.now;
        self.touches.drain(|touch| {
            host.dispatch(
                HostEvent::Touch {
                    listener: PANEL,
                    touch,
                },
                now,
            );
        });
    }

    fn open(&mut self) {
        self.send(HostEvent::Click {
            listener: CART_ICON,
        });
        self.advance(50);
        self.send(HostEvent::TransitionEnd { listener: ROOT });
    }

    /// Plays `(delay_ms, y)` moves after a start at `start_y`, then releases
    /// at the last position. The whole gesture is queued and delivered in one
    /// batch, as a platform that coalesces input per frame would.
    fn gesture(&mut self, target: ElementId, start_y: f32, moves: &[(u64, f32)]) {
        self.touches
            .push(TouchEvent::start(start_y, self.clock_ms).with_target(target));
        let mut last = start_y;
        for &(delay, y) in moves {
            self.advance(delay);
            self.touches.push(TouchEvent::moved(y, self.clock_ms));
            last = y;
        }
        self.touches.push(TouchEvent::end(last, self.clock_ms));
        log::debug!("demo: delivering {} queued touches", self.touches.len());
        self.flush_touches();
    }

    fn state(&self) -> DrawerVisualState {
        self.host.state()
    }
}

struct Scenario {
    name: &'static str,
    expected: DrawerVisualState,
    run: fn(&mut Session),
}

const SCENARIOS: &[Scenario] = &[
    Scenario {
        name: "A: upward move aborts the gesture",
        expected: DrawerVisualState::Open,
        run: |s| s.gesture(ITEM_ROW, 500.0, &[(40, 400.0), (40, 600.0), (40, 600.0)]),
    },
    Scenario {
        name: "B: 90px drag closes by distance",
        expected: DrawerVisualState::Closed,
        run: |s| s.gesture(ITEM_ROW, 200.0, &[(50, 290.0)]),
    },
    Scenario {
        name: "C: 30px flick in 50ms closes by velocity",
        expected: DrawerVisualState::Closed,
        run: |s| s.gesture(ITEM_ROW, 200.0, &[(50, 230.0)]),
    },
    Scenario {
        name: "D: slow 20px drag snaps back",
        expected: DrawerVisualState::Open,
        run: |s| s.gesture(ITEM_ROW, 200.0, &[(100, 220.0)]),
    },
    Scenario {
        name: "scrolled list keeps native scrolling",
        expected: DrawerVisualState::Open,
        run: |s| {
            s.page.scroll_list_to(240.0);
            s.gesture(ITEM_ROW, 200.0, &[(50, 400.0)]);
        },
    },
    Scenario {
        name: "header drag closes while list is scrolled",
        expected: DrawerVisualState::Closed,
        run: |s| {
            s.page.scroll_list_to(240.0);
            s.gesture(HEADER, 30.0, &[(60, 130.0)]);
        },
    },
];

fn main() {
    #[cfg(feature = "logging")]
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .init();

    println!("=== Swipe Drawer Demo ===");
    println!("Each scenario opens the drawer, plays a touch gesture on the panel,");
    println!("and checks whether the drawer ended up closed or still open.");
    println!();

    let mut failures = 0;
    for scenario in SCENARIOS {
        log::info!("--- {} ---", scenario.name);
        let mut session = match Session::new(DrawerConfig::default()) {
            Ok(session) => session,
            Err(err) => {
                log::error!("invalid drawer config: {err}");
                std::process::exit(2);
            }
        };
        session.open();
        (scenario.run)(&mut session);

        let outcome = session.state();
        let ok = outcome == scenario.expected;
        if !ok {
            failures += 1;
        }
        println!(
            "[{}] {} -> {:?} (focus on {:?})",
            if ok { "ok" } else { "FAIL" },
            scenario.name,
            outcome,
            session.page.focused()
        );
    }

    log::info!("--- cart update reopens the drawer ---");
    if let Ok(mut session) = Session::new(DrawerConfig::default()) {
        let contents = CartContents {
            product_id: Some(4021),
            ..CartContents::default()
        }
        .with_section("cart-drawer", "<div id=\"CartDrawer\">1 item</div>")
        .with_section("cart-icon-bubble", "<span>1</span>");
        let now = session.now;
        session.host.render_contents(&contents, now);
        session.advance(100 + 50);
        session.send(HostEvent::TransitionEnd { listener: ROOT });
        println!("[info] after cart update -> {:?}", session.state());
    }

    if failures > 0 {
        std::process::exit(1);
    }
}
