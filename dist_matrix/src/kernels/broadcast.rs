use ndarray::{Array2, ArrayView1, ArrayView2, ArrayViewMut1, Axis, NdFloat};
use rayon::prelude::*;

// all distances from one row of X to every row of Y
fn broadcast_row<T: NdFloat>(x_row: ArrayView1<T>, y: ArrayView2<T>, mut out_row: ArrayViewMut1<T>) {
    let mut diff = &y - &x_row;
    diff.mapv_inplace(|v| v * v);
    out_row.assign(&diff.sum_axis(Axis(1)));
}

pub(crate) fn broadcast<T: NdFloat>(x: ArrayView2<T>, y: ArrayView2<T>) -> Array2<T> {
    let mut out = Array2::zeros((x.nrows(), y.nrows()));

    for (x_row, out_row) in x.axis_iter(Axis(0)).zip(out.axis_iter_mut(Axis(0))) {
        broadcast_row(x_row, y, out_row);
    }

    out
}

pub(crate) fn par_broadcast<T: NdFloat>(x: ArrayView2<T>, y: ArrayView2<T>) -> Array2<T> {
    let mut out = Array2::zeros((x.nrows(), y.nrows()));

    out.axis_iter_mut(Axis(0))
        .into_par_iter()
        .zip(x.axis_iter(Axis(0)).into_par_iter())
        .for_each(|(out_row, x_row)| broadcast_row(x_row, y, out_row));

    out
}
