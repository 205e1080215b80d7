mod minmax;
mod stratified_split;

pub use minmax::{Axis, DEFAULT_EPS, minmax_scale, minmax_scale_vec};
pub use stratified_split::{
    DEFAULT_SEED, TrainTestSplit, stratified_split, stratified_split_seeded,
};
