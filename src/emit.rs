// Dashboard data module generation
//
// The dashboard consumes static TypeScript modules, one per pipeline. Each
// module is a doc-block header, the interface declarations, and a single
// exported constant whose initializer is the serialized record array.

pub mod ts_module;

pub use ts_module::{
    render_comprehensive_module, render_historical_module, write_comprehensive_module,
    write_historical_module, EmitError, COMPREHENSIVE_MODULE, HISTORICAL_MODULE,
};
