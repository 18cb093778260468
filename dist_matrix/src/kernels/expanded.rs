use ndarray::{Array1, Array2, ArrayView2, Axis, NdFloat, Zip};

/// Squared L2 norm of every row.
pub(crate) fn row_norms<T: NdFloat>(a: ArrayView2<T>) -> Array1<T> {
    a.map_axis(Axis(1), |row| row.dot(&row))
}

fn par_row_norms<T: NdFloat>(a: ArrayView2<T>) -> Array1<T> {
    Zip::from(a.rows()).par_map_collect(|row| row.dot(&row))
}

// x2[i] + y2[j] - 2 xy[i,j] can come out slightly negative when the true
// distance is close to zero, hence the abs.
#[inline]
fn combine<T: NdFloat>(x2: T, y2: T, xy: T) -> T {
    (x2 + y2 - (xy + xy)).abs()
}

pub(crate) fn expanded<T: NdFloat>(x: ArrayView2<T>, y: ArrayView2<T>) -> Array2<T> {
    let x2 = row_norms(x);
    let y2 = row_norms(y);
    let mut xy = x.dot(&y.t());

    Zip::indexed(&mut xy).for_each(|(i, j), cell| {
        *cell = combine(x2[i], y2[j], *cell);
    });

    xy
}

pub(crate) fn par_expanded<T: NdFloat>(x: ArrayView2<T>, y: ArrayView2<T>) -> Array2<T> {
    let x2 = par_row_norms(x);
    let y2 = par_row_norms(y);
    // dot is already threaded by matrixmultiply
    let mut xy = x.dot(&y.t());

    Zip::indexed(&mut xy).par_for_each(|(i, j), cell| {
        *cell = combine(x2[i], y2[j], *cell);
    });

    xy
}
