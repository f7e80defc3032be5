//! Cow behavior: none.  Cows are registered as actor-layer obstacles at
//! build time and then stand exactly where they are — their whole job is to
//! be something everyone else has to dodge around.

use tracing::info;

use crate::AgentCtx;

pub fn run(ctx: AgentCtx) {
    info!(id = %ctx.id, "cow grazing");
    loop {
        // Park tolerates spurious unparks; the cow never has anywhere to be.
        std::thread::park();
    }
}
