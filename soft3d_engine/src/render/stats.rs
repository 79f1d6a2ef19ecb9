/// Per-frame counters filled by the pipelines.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RenderStats {
    /// Faces of active meshes handed to the pipeline
    pub faces_submitted: usize,
    /// Faces with fewer than three indices or an out-of-range index
    pub faces_skipped: usize,
    /// Faces rejected as back-facing
    pub faces_culled: usize,
    /// Faces left with fewer than three vertices by near-plane clipping
    pub faces_clipped: usize,
    /// Faces that reached rasterization
    pub faces_drawn: usize,
    /// Non-degenerate triangles scanned
    pub triangles_rasterized: usize,
    /// Colour writes that landed in the render texture
    pub pixels_written: usize,
}
