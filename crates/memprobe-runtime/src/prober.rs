//! Live prober for this process's address space

use std::sync::OnceLock;

use memprobe_core::{
    kwarn, Address, Classified, Classifier, MemoryProbe, PageProbe, PageSize, ProbeResult,
    ScanOutcome, StringSniffer,
};

use crate::config::ProbeConfig;
use crate::memory::{PlatformPageSize, PlatformQuery, VolatileReader};

/// `PageProbe` over the platform primitives
pub type LiveProbe = PageProbe<PlatformQuery, PlatformPageSize>;

/// Probe, sniffer and classifier bound to the current process
pub struct Prober {
    probe: LiveProbe,
    horizon: usize,
}

impl Prober {
    pub fn new(config: &ProbeConfig) -> Self {
        Self {
            probe: PageProbe::new(PlatformQuery::default(), PlatformPageSize::default()),
            horizon: config.horizon,
        }
    }

    /// Process-wide prober, built from the environment on first use
    ///
    /// An invalid environment configuration falls back to the defaults.
    pub fn global() -> &'static Prober {
        static GLOBAL: OnceLock<Prober> = OnceLock::new();
        GLOBAL.get_or_init(|| {
            let mut config = ProbeConfig::from_env();
            if let Err(e) = config.validate() {
                kwarn!("{}; using default horizon", e);
                config = config.horizon(crate::config::defaults::HORIZON);
            }
            memprobe_core::set_log_level(config.log_level);
            Prober::new(&config)
        })
    }

    #[inline]
    pub fn horizon(&self) -> usize {
        self.horizon
    }

    #[inline]
    pub fn page_size(&self) -> Option<PageSize> {
        self.probe.page_size()
    }

    /// Mapped or Unmapped; indeterminate failures count as Unmapped
    #[inline]
    pub fn probe(&self, address: Address) -> ProbeResult {
        self.probe.probe(address)
    }

    /// Three-way probe result, for diagnostics
    #[inline]
    pub fn inspect(&self, address: Address) -> ProbeResult {
        self.probe.inspect(address)
    }

    /// Range queries issued by this prober so far
    #[inline]
    pub fn probe_count(&self) -> u64 {
        self.probe.probe_count()
    }

    pub fn sniff(&self, address: Address) -> ScanOutcome {
        self.sniff_with_horizon(address, self.horizon)
    }

    pub fn sniff_with_horizon(&self, address: Address, horizon: usize) -> ScanOutcome {
        self.sniffer(horizon).sniff(address)
    }

    /// Copy of the string at `address`, if there is one within the horizon
    pub fn sniff_bytes(&self, address: Address) -> Option<Vec<u8>> {
        self.sniffer(self.horizon).sniff_bytes(address)
    }

    pub fn classify(&self, address: Address) -> Classified {
        Classifier::new(self.sniffer(self.horizon)).classify(address)
    }

    fn sniffer(&self, horizon: usize) -> StringSniffer<&LiveProbe, VolatileReader> {
        StringSniffer::new(&self.probe, VolatileReader, horizon)
    }
}
