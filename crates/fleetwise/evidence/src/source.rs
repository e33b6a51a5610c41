//! The seam between the health engine and wherever history comes from.

use crate::error::EvidenceResult;
use crate::types::{
    EvidenceBundle, EvidenceQuery, FleetPattern, InspectionRecord, OilAnalysisRecord, WorkOrder,
};

/// Provider of historical evidence for an asset+component.
///
/// The synthetic generator implements this today; a CMMS or telemetry
/// feed can replace it without touching the inference logic.
pub trait EvidenceSource: Send + Sync {
    /// Short name reported in `sources_queried`.
    fn name(&self) -> &str;

    fn work_orders(&self, query: &EvidenceQuery) -> EvidenceResult<Vec<WorkOrder>>;

    fn inspections(&self, query: &EvidenceQuery) -> EvidenceResult<Vec<InspectionRecord>>;

    fn oil_analyses(&self, query: &EvidenceQuery) -> EvidenceResult<Vec<OilAnalysisRecord>>;

    fn fleet_patterns(&self, query: &EvidenceQuery) -> EvidenceResult<Vec<FleetPattern>>;

    /// Gather every record kind into one bundle.
    fn collect(&self, query: &EvidenceQuery) -> EvidenceResult<EvidenceBundle> {
        Ok(EvidenceBundle {
            work_orders: self.work_orders(query)?,
            inspections: self.inspections(query)?,
            oil_analyses: self.oil_analyses(query)?,
            fleet_patterns: self.fleet_patterns(query)?,
        })
    }
}

/// A source with no history at all.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmptyEvidenceSource;

impl EvidenceSource for EmptyEvidenceSource {
    fn name(&self) -> &str {
        "none"
    }

    fn work_orders(&self, _query: &EvidenceQuery) -> EvidenceResult<Vec<WorkOrder>> {
        Ok(Vec::new())
    }

    fn inspections(&self, _query: &EvidenceQuery) -> EvidenceResult<Vec<InspectionRecord>> {
        Ok(Vec::new())
    }

    fn oil_analyses(&self, _query: &EvidenceQuery) -> EvidenceResult<Vec<OilAnalysisRecord>> {
        Ok(Vec::new())
    }

    fn fleet_patterns(&self, _query: &EvidenceQuery) -> EvidenceResult<Vec<FleetPattern>> {
        Ok(Vec::new())
    }
}
