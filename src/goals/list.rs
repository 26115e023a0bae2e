use crate::core::term::Term;
use crate::goals::primitive::eq;

defrel! {
    /// `p` is the list cell with head `a` and tail `d`.
    pub conso(a, d, p) {
        eq(Term::cons(a, d), p)
    }
}

defrel! {
    /// `a` is the head of `p`.
    pub caro(p, a) {
        fresh!{ (d),
            eq(Term::cons(a.clone(), d), p.clone())
        }
    }
}

defrel! {
    /// `d` is the tail of `p`.
    pub cdro(p, d) {
        fresh!{ (a),
            eq(Term::cons(a, d.clone()), p.clone())
        }
    }
}

defrel! {
    pub nullo(x) {
        eq(x, Term::nil())
    }
}

defrel! {
    pub pairo(p) {
        fresh!{ (a, d),
            conso(a, d, p.clone())
        }
    }
}

defrel! {
    /// `x` is an element of `l`.
    pub membero(x, l) {
        conde!{
            caro(l.clone(), x.clone());
            fresh!{ (d),
                cdro(l.clone(), d),
                membero(x.clone(), d)
            };
        }
    }
}

defrel! {
    /// `out` is `l` followed by `t`.
    pub appendo(l, t, out) {
        conde!{
            nullo(l.clone()), eq(t.clone(), out.clone());
            fresh!{ (a, d, res),
                conso(a, d, l.clone()),
                conso(a, res, out.clone()),
                appendo(d, t.clone(), res)
            };
        }
    }
}
