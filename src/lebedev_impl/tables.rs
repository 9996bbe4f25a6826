use super::Orbit;

/// One tabulated Lebedev-Laikov rule: point count, algebraic order and the
/// octahedral orbits generating it. Weights are normalized to a unit sum.
pub(super) struct LebedevRule {
    pub npoints: usize,
    pub order: usize,
    pub orbits: &'static [Orbit],
}

pub(super) static RULES: &[LebedevRule] = &[
    LebedevRule {
        npoints: 6,
        order: 3,
        orbits: &[
            Orbit::A1(1.6666666666666671e-1),
        ],
    },
    LebedevRule {
        npoints: 14,
        order: 5,
        orbits: &[
            Orbit::A1(6.6666666666666666e-2),
            Orbit::A3(7.4999999999999997e-2),
        ],
    },
    LebedevRule {
        npoints: 26,
        order: 7,
        orbits: &[
            Orbit::A1(4.7619047619047623e-2),
            Orbit::A2(3.8095238095238099e-2),
            Orbit::A3(3.2142857142857140e-2),
        ],
    },
    LebedevRule {
        npoints: 38,
        order: 9,
        orbits: &[
            Orbit::A1(9.5238095238095247e-3),
            Orbit::A3(3.2142857142857140e-2),
            Orbit::C(4.5970084338098310e-1, 2.8571428571428571e-2),
        ],
    },
    LebedevRule {
        npoints: 50,
        order: 11,
        orbits: &[
            Orbit::A1(1.2698412698412700e-2),
            Orbit::A2(2.2574955908289240e-2),
            Orbit::A3(2.1093750000000001e-2),
            Orbit::B(3.0151134457776357e-1, 2.0173335537918870e-2),
        ],
    },
    LebedevRule {
        npoints: 74,
        order: 13,
        orbits: &[
            Orbit::A1(5.1306717973384638e-4),
            Orbit::A2(1.6604069565742039e-2),
            Orbit::A3(-2.9586038961038959e-2),
            Orbit::B(4.8038446141526142e-1, 2.6576207082159461e-2),
            Orbit::C(3.2077264898077640e-1, 1.6522170993715710e-2),
        ],
    },
    LebedevRule {
        npoints: 86,
        order: 15,
        orbits: &[
            Orbit::A1(1.1544011544011535e-2),
            Orbit::A3(1.1943909085856302e-2),
            Orbit::B(3.6960284645415020e-1, 1.1110555710603400e-2),
            Orbit::B(6.9435400660266644e-1, 1.1876501294537142e-2),
            Orbit::C(3.7424303909034112e-1, 1.1812303746904489e-2),
        ],
    },
    LebedevRule {
        npoints: 110,
        order: 17,
        orbits: &[
            Orbit::A1(3.8282704949371619e-3),
            Orbit::A3(9.7937375124875128e-3),
            Orbit::B(1.8511563534473621e-1, 8.2117372831911114e-3),
            Orbit::B(6.9042104838229224e-1, 9.9428148911781030e-3),
            Orbit::B(3.9568947305594188e-1, 9.5954713360709622e-3),
            Orbit::C(4.7836902881215021e-1, 9.6949963616630285e-3),
        ],
    },
    LebedevRule {
        npoints: 146,
        order: 19,
        orbits: &[
            Orbit::A1(5.9963136886211760e-4),
            Orbit::A2(7.3729997186207635e-3),
            Orbit::A3(7.2105153601444974e-3),
            Orbit::B(1.5746766720390812e-1, 7.5743941590540338e-3),
            Orbit::B(4.1749612279654535e-1, 6.7538294863144707e-3),
            Orbit::B(6.7644104001142646e-1, 7.1163554931175455e-3),
            Orbit::D(1.4035538117131832e-1, 4.4933283232695564e-1, 6.9910873533032625e-3),
        ],
    },
    LebedevRule {
        npoints: 170,
        order: 21,
        orbits: &[
            Orbit::A1(5.5448429020373653e-3),
            Orbit::A2(6.0713327706707516e-3),
            Orbit::A3(6.3836747735150929e-3),
            Orbit::B(2.5512526211141340e-1, 5.1833875877477899e-3),
            Orbit::B(6.7436014603627659e-1, 6.3179290098137253e-3),
            Orbit::B(4.3189106967194102e-1, 6.2016700065890768e-3),
            Orbit::C(2.6139313603359882e-1, 5.4771433851373477e-3),
            Orbit::D(4.9904531617960368e-1, 1.4466307443251150e-1, 5.9683839876811563e-3),
        ],
    },
    LebedevRule {
        npoints: 194,
        order: 23,
        orbits: &[
            Orbit::A1(1.7823404472446110e-3),
            Orbit::A2(5.7169059499771017e-3),
            Orbit::A3(5.5733831788487382e-3),
            Orbit::B(6.7129734426952259e-1, 5.6087040825879972e-3),
            Orbit::B(2.8924656275754390e-1, 5.1582377118053833e-3),
            Orbit::B(4.4469331787174371e-1, 5.5187714672736143e-3),
            Orbit::B(1.2993354476500671e-1, 4.1067770281693937e-3),
            Orbit::C(3.4577021976112832e-1, 5.0518460646148079e-3),
            Orbit::D(1.5904171053835300e-1, 8.3603601548245887e-1, 5.5302489162330944e-3),
        ],
    },
    LebedevRule {
        npoints: 230,
        order: 25,
        orbits: &[
            Orbit::A1(-5.5226399197273249e-2),
            Orbit::A3(4.4502746074452258e-3),
            Orbit::B(4.4920446873976111e-1, 4.4968410679214043e-3),
            Orbit::B(2.5204194902102012e-1, 5.0491534504787496e-3),
            Orbit::B(6.9819066584472422e-1, 3.9764080180518828e-3),
            Orbit::B(6.5874052434609598e-1, 4.4014006503810144e-3),
            Orbit::B(4.0385440500976602e-2, 1.7245443505444009e-2),
            Orbit::C(5.8238423097155845e-1, 4.2310830953573427e-3),
            Orbit::C(3.5458773905186880e-1, 5.1980698640643986e-3),
            Orbit::D(2.2721818089981871e-1, 4.8646615358866468e-1, 4.6957209725688826e-3),
        ],
    },
    LebedevRule {
        npoints: 266,
        order: 27,
        orbits: &[
            Orbit::A1(-1.3137691273270198e-3),
            Orbit::A2(-2.5227287048595276e-3),
            Orbit::A3(4.1868538817005979e-3),
            Orbit::B(1.0125262485724119e-1, 4.0471423770862391e-3),
            Orbit::B(3.2774206549716278e-1, 3.5955848997587785e-3),
            Orbit::B(4.6474487264205394e-1, 4.1124823944069886e-3),
            Orbit::B(6.6203386636999750e-1, 4.2561313514281572e-3),
            Orbit::B(7.0393733915854761e-1, 5.3151679778109797e-3),
            Orbit::C(8.5065080835203988e-1, 4.2295827006472555e-3),
            Orbit::D(1.1531120110097030e-1, 3.2334845426929015e-1, 4.0809142257805043e-3),
            Orbit::D(2.3147901587126044e-1, 5.2449392409223650e-1, 4.0714675938309571e-3),
        ],
    },
    LebedevRule {
        npoints: 302,
        order: 29,
        orbits: &[
            Orbit::A1(8.5459117251281483e-4),
            Orbit::A3(3.5991192850255709e-3),
            Orbit::B(3.5156403455701052e-1, 3.4497884243058830e-3),
            Orbit::B(6.5663294102196124e-1, 3.6048226014198819e-3),
            Orbit::B(4.7290541325810048e-1, 3.5767296617433670e-3),
            Orbit::B(9.6183085226147838e-2, 2.3521014136891642e-3),
            Orbit::B(2.2196452362941779e-1, 3.1089531224136749e-3),
            Orbit::B(7.0117664160895454e-1, 3.6500458076772551e-3),
            Orbit::C(2.6441528870606629e-1, 2.9823449631718041e-3),
            Orbit::C(5.7189558918789607e-1, 3.6008209322164601e-3),
            Orbit::D(2.5100347517704652e-1, 8.0007274940739515e-1, 3.5715405542733870e-3),
            Orbit::D(1.2335485325833270e-1, 4.1277240831685308e-1, 3.3923122050061698e-3),
        ],
    },
    LebedevRule {
        npoints: 350,
        order: 31,
        orbits: &[
            Orbit::A1(3.0067967494539359e-3),
            Orbit::A3(3.0506277456507709e-3),
            Orbit::B(7.0689654639123156e-1, 1.6211046002889910e-3),
            Orbit::B(4.7946826257120251e-1, 3.0057014849017519e-3),
            Orbit::B(1.9275331548780189e-1, 2.9909925296537740e-3),
            Orbit::B(6.9303579613271227e-1, 2.9821706441075951e-3),
            Orbit::B(3.6083021155200912e-1, 2.7215642373109921e-3),
            Orbit::B(6.4984861614961686e-1, 3.0335137958111412e-3),
            Orbit::C(1.9329450132303391e-1, 3.0079495552185328e-3),
            Orbit::C(3.8004949198993032e-1, 2.8819646030553070e-3),
            Orbit::D(2.8995588254995741e-1, 7.9345378565823155e-1, 2.9583576265356962e-3),
            Orbit::D(9.6841214551039570e-2, 8.2808015066868623e-1, 3.0360200264070878e-3),
            Orbit::D(1.8334346470416590e-1, 9.0746582653051266e-1, 2.8321874039263029e-3),
        ],
    },
    LebedevRule {
        npoints: 434,
        order: 35,
        orbits: &[
            Orbit::A1(5.2658979682244358e-4),
            Orbit::A2(2.5482199720026069e-3),
            Orbit::A3(2.5123174189273069e-3),
            Orbit::B(6.9093463075091111e-1, 2.5304038011863552e-3),
            Orbit::B(1.7748360546091579e-1, 2.0142790209185281e-3),
            Orbit::B(4.9143426377847460e-1, 2.5017251684029359e-3),
            Orbit::B(6.4566647074242556e-1, 2.5132671745975639e-3),
            Orbit::B(2.8612890103076383e-1, 2.3026947822274162e-3),
            Orbit::B(7.5680843671780185e-2, 1.4624956215946140e-3),
            Orbit::B(3.9272597633680018e-1, 2.4453734373129799e-3),
            Orbit::C(8.8181328777942880e-1, 2.4174423756389810e-3),
            Orbit::C(9.7764281111826490e-1, 1.9109512821795321e-3),
            Orbit::D(2.0548236964030439e-1, 8.6894603228724121e-1, 2.4169300443247750e-3),
            Orbit::D(5.9051570489252714e-1, 7.9992785438572855e-1, 2.5122368545634952e-3),
            Orbit::D(5.5501523610768067e-1, 7.7174626269159008e-1, 2.4966440545530861e-3),
            Orbit::D(9.3718098585537224e-1, 3.3443631453434552e-1, 2.2366077604378488e-3),
        ],
    },
    LebedevRule {
        npoints: 590,
        order: 41,
        orbits: &[
            Orbit::A1(3.0951212953556225e-4),
            Orbit::A3(1.8523796985974777e-3),
            Orbit::B(6.0950341155151952e-2, 9.7643311650451770e-4),
            Orbit::B(1.4590364491580324e-1, 1.3847372348512513e-3),
            Orbit::B(2.3847367014219675e-1, 1.6172106472542569e-3),
            Orbit::B(3.3179207364721480e-1, 1.7495646572811021e-3),
            Orbit::B(4.2157617840109746e-1, 1.8184717781627477e-3),
            Orbit::B(5.0444197078003628e-1, 1.8467159561512375e-3),
            Orbit::B(6.3725469392587542e-1, 1.8520288282962145e-3),
            Orbit::B(6.8077440664552435e-1, 1.8588125854383127e-3),
            Orbit::B(7.0409549382274694e-1, 1.8717906392777439e-3),
            Orbit::C(1.7247820099077049e-1, 1.3003216858860367e-3),
            Orbit::C(3.9647553481998554e-1, 1.7051539963958650e-3),
            Orbit::C(6.1168434420098761e-1, 1.8571611967740770e-3),
            Orbit::D(8.2130215819324517e-2, 2.7786731905862361e-1, 1.5552136033968127e-3),
            Orbit::D(8.9992058420748755e-2, 5.0335642710751161e-1, 1.8022391280085278e-3),
            Orbit::D(1.7207952256568740e-1, 3.7910354076955577e-1, 1.7139045071067154e-3),
            Orbit::D(1.8166408403602091e-1, 5.9841264978853781e-1, 1.8498305604436628e-3),
            Orbit::D(2.6347166559379465e-1, 4.7423928425519785e-1, 1.8026589343774530e-3),
            Orbit::D(3.5182809277335209e-1, 5.6102638086220580e-1, 1.8428664729052892e-3),
        ],
    },
    LebedevRule {
        npoints: 770,
        order: 47,
        orbits: &[
            Orbit::A1(2.1929420878804610e-4),
            Orbit::A2(1.4364336173190557e-3),
            Orbit::A3(1.4219403443358905e-3),
            Orbit::B(5.0872044104434327e-2, 6.7981235110838088e-4),
            Orbit::B(1.2281987901768944e-1, 9.9131842353209387e-4),
            Orbit::B(2.0268908144081871e-1, 1.1802078332398534e-3),
            Orbit::B(2.8477451564640954e-1, 1.2965996020812278e-3),
            Orbit::B(3.6567190789779574e-1, 1.3658714274284280e-3),
            Orbit::B(4.4282648867134417e-1, 1.4029886047753667e-3),
            Orbit::B(5.1406196272497273e-1, 1.4186455635956316e-3),
            Orbit::B(6.3064012191668017e-1, 1.4213767418516680e-3),
            Orbit::B(6.7168833320226096e-1, 1.4239964754909698e-3),
            Orbit::B(6.9797926853368808e-1, 1.4315540421785634e-3),
            Orbit::C(1.4468656741950917e-1, 9.2544014998650296e-4),
            Orbit::C(3.3902634754112249e-1, 1.2502399950535183e-3),
            Orbit::C(5.3358046512635016e-1, 1.3943658433292296e-3),
            Orbit::D(6.9440243933488258e-2, 2.3551878942422555e-1, 1.1270890946717949e-3),
            Orbit::D(7.7148158667657812e-2, 4.3465755161411679e-1, 1.3383666844795480e-3),
            Orbit::D(8.0255746077753182e-2, 6.2143024174816053e-1, 1.4249572833167914e-3),
            Orbit::D(1.4679995278965419e-1, 3.2452843457173625e-1, 1.2615233412377857e-3),
            Orbit::D(1.5715077698247287e-1, 5.2244821896966309e-1, 1.3925471060526971e-3),
            Orbit::D(2.2690041095294483e-1, 4.1021824740457163e-1, 1.3457537609106857e-3),
            Orbit::D(2.3657029931572454e-1, 6.0175466340895611e-1, 1.4187616778776493e-3),
            Orbit::D(3.0629366662107244e-1, 4.9088265890376148e-1, 1.3937008626761411e-3),
            Orbit::D(3.8224773795247846e-1, 5.6487681490994957e-1, 1.4159147574669313e-3),
        ],
    },
    LebedevRule {
        npoints: 974,
        order: 53,
        orbits: &[
            Orbit::A1(1.4382941888063303e-4),
            Orbit::A3(1.1257722882869715e-3),
            Orbit::B(4.2929635449725140e-2, 4.9480293421871381e-4),
            Orbit::B(1.0514268540761018e-1, 7.3579901092646306e-4),
            Orbit::B(1.7500248676204611e-1, 8.8891327713443657e-4),
            Orbit::B(2.4776533796495295e-1, 9.8883478389327545e-4),
            Orbit::B(3.2065671239557347e-1, 1.0532996817098179e-3),
            Orbit::B(3.9165207498499094e-1, 1.0927788070146916e-3),
            Orbit::B(4.5908258741875979e-1, 1.1143893940632743e-3),
            Orbit::B(5.2145638884158541e-1, 1.1237247880515767e-3),
            Orbit::B(6.2531702446541959e-1, 1.1252393252438283e-3),
            Orbit::B(6.6379267445231693e-1, 1.1261532718159094e-3),
            Orbit::B(6.9104103984982990e-1, 1.1302869311238368e-3),
            Orbit::B(7.0529070074577604e-1, 1.1349865343639471e-3),
            Orbit::C(1.2366867626584464e-1, 6.8233679271099946e-4),
            Orbit::C(2.9407771144683392e-1, 9.4541581604469581e-4),
            Orbit::C(4.6977538492076487e-1, 1.0744299753856878e-3),
            Orbit::C(6.3345632411395703e-1, 1.1293000865691303e-3),
            Orbit::D(5.9740486141823791e-2, 2.0291287527776303e-1, 8.4368845009007761e-4),
            Orbit::D(6.7092846007381232e-2, 3.7983952168591312e-1, 1.0225687153580698e-3),
            Orbit::D(7.0577381832561820e-2, 5.5175054214235253e-1, 1.1089602677131097e-3),
            Orbit::D(1.2716751914398575e-1, 2.8176064224421665e-1, 9.5664753237827756e-4),
            Orbit::D(1.3757604084736233e-1, 4.6026219424840431e-1, 1.0752557204488956e-3),
            Orbit::D(1.4197864526019210e-1, 6.2561673585808186e-1, 1.1267971311962955e-3),
            Orbit::D(1.9795789389174126e-1, 3.5896063295891023e-1, 1.0324018471174357e-3),
            Orbit::D(2.0873070611032651e-1, 5.3486664381354709e-1, 1.1072493822838580e-3),
            Orbit::D(2.6931207404135077e-1, 4.3315612917201557e-1, 1.0806632507173854e-3),
            Orbit::D(2.7838884778821527e-1, 6.0296191561591816e-1, 1.1227906534357701e-3),
            Orbit::D(3.3910165263362824e-1, 5.0306739996620342e-1, 1.1085772368644670e-3),
            Orbit::D(4.0551221378728336e-1, 5.6749975460743729e-1, 1.1217800485199727e-3),
        ],
    },
    LebedevRule {
        npoints: 1202,
        order: 59,
        orbits: &[
            Orbit::A1(1.1051892468661440e-4),
            Orbit::A2(9.2052327380906106e-4),
            Orbit::A3(9.1331597864434833e-4),
            Orbit::B(3.7126364529821626e-2, 3.6904218960487242e-4),
            Orbit::B(9.1400604131203600e-2, 5.6039909275973885e-4),
            Orbit::B(1.5310778524895971e-1, 6.8652976289972469e-4),
            Orbit::B(2.1809288916654163e-1, 7.7203385510725485e-4),
            Orbit::B(2.8398745322014324e-1, 8.3015459588749922e-4),
            Orbit::B(3.4911776009641016e-1, 8.6866925501739400e-4),
            Orbit::B(4.1214314614443964e-1, 8.9270762858451784e-4),
            Orbit::B(4.7189936271491478e-1, 9.0608202385678320e-4),
            Orbit::B(5.2731454528423449e-1, 9.1197772549408106e-4),
            Orbit::B(6.2094753324440255e-1, 9.1287201386043917e-4),
            Orbit::B(6.5697227118572921e-1, 9.1307149356918303e-4),
            Orbit::B(6.8417883090701437e-1, 9.1528737845541542e-4),
            Orbit::B(7.0126043301236296e-1, 9.1874362743216208e-4),
            Orbit::C(1.0723822154725164e-1, 5.1769773129639184e-4),
            Orbit::C(2.5820689594969298e-1, 7.3311436821020103e-4),
            Orbit::C(4.1727529553066728e-1, 8.4632328363799412e-4),
            Orbit::C(5.7003669117925171e-1, 9.0311226942541099e-4),
            Orbit::D(5.2106394769987671e-2, 1.7717740226136164e-1, 6.4857784531726454e-4),
            Orbit::D(5.9058888532355483e-2, 3.3546162890664633e-1, 7.9985278918388381e-4),
            Orbit::D(6.2662506241540072e-2, 4.9322211848512693e-1, 8.8032086797383720e-4),
            Orbit::D(6.4245492242206118e-2, 6.3942796347491149e-1, 9.1580161746934350e-4),
            Orbit::D(1.1156409571558601e-1, 2.4757164634255802e-1, 7.4350309109878375e-4),
            Orbit::D(1.2172350510959772e-1, 4.0902684270853379e-1, 8.4833895745943717e-4),
            Orbit::D(1.2677748006842687e-1, 5.6321230207620998e-1, 9.0213422990407697e-4),
            Orbit::D(1.7465516775783510e-1, 3.1736152466116629e-1, 8.1017314974705901e-4),
            Orbit::D(1.8575051945473156e-1, 4.7853206759224304e-1, 8.8110481824257760e-4),
            Orbit::D(1.9060182227792385e-1, 6.2698055090243843e-1, 9.1315780031894062e-4),
            Orbit::D(2.3902784793815846e-1, 3.8542911506690908e-1, 8.5562992573130694e-4),
            Orbit::D(2.4941121623622287e-1, 5.4343035696938902e-1, 9.0100916771051164e-4),
            Orbit::D(3.0294669735289159e-1, 4.5074225931569972e-1, 8.8502823412660227e-4),
            Orbit::D(3.1122759471496092e-1, 6.0311616930963063e-1, 9.1078135794827480e-4),
            Orbit::D(3.6498322605976197e-1, 5.1235184864198369e-1, 9.0226929384272102e-4),
            Orbit::D(4.2386447815223294e-1, 5.6937024984684226e-1, 9.1057602589703123e-4),
        ],
    },
    LebedevRule {
        npoints: 1454,
        order: 65,
        orbits: &[
            Orbit::A1(7.7771621549169661e-5),
            Orbit::A3(7.5576464130034434e-4),
            Orbit::B(3.2292907021433101e-2, 2.8416337854340478e-4),
            Orbit::B(8.0367332810256265e-2, 4.3744191162997783e-4),
            Orbit::B(1.3542899607469483e-1, 5.4171747381131293e-4),
            Orbit::B(1.9389638611673485e-1, 6.1480008906615363e-4),
            Orbit::B(2.5373437150257083e-1, 6.6643944856111046e-4),
            Orbit::B(3.1352514347569005e-1, 7.0250393568669440e-4),
            Orbit::B(3.7215583393767571e-1, 7.2685117892314966e-4),
            Orbit::B(4.2868095751961988e-1, 7.4226375342023088e-4),
            Orbit::B(4.8225101282831834e-1, 7.5095450358388680e-4),
            Orbit::B(5.3206793335663327e-1, 7.5485350577173330e-4),
            Orbit::B(6.1729981953942792e-1, 7.5540889697736072e-4),
            Orbit::B(6.5106798491274864e-1, 7.5531471744426587e-4),
            Orbit::B(6.7773152516873625e-1, 7.5647676532921587e-4),
            Orbit::B(6.9631094106487446e-1, 7.5879918085187731e-4),
            Orbit::B(7.0589350098317505e-1, 7.6082618320332483e-4),
            Orbit::C(9.4185985016279478e-2, 4.0216804478769081e-4),
            Orbit::C(2.2906303958602153e-1, 5.8048717939422493e-4),
            Orbit::C(3.7365098398005958e-1, 6.7921519559455297e-4),
            Orbit::C(5.1564514700014830e-1, 7.3367412112860836e-4),
            Orbit::C(6.4716547762083709e-1, 7.5818663009896237e-4),
            Orbit::D(4.5986429107252147e-2, 1.5646960986575864e-1, 5.0957088492107618e-4),
            Orbit::D(5.2519897841204914e-2, 2.9901890577584667e-1, 6.3809411456040572e-4),
            Orbit::D(5.6115220958826088e-2, 4.4387299383125023e-1, 7.1101205276579912e-4),
            Orbit::D(5.7975895314453074e-2, 5.8172180618025926e-1, 7.4899083290791521e-4),
            Orbit::D(9.8928789797104302e-2, 2.1976820229280561e-1, 5.8975588965738538e-4),
            Orbit::D(1.0869649018221696e-1, 3.6641081823137228e-1, 6.8170220321127990e-4),
            Orbit::D(1.1402384653905459e-1, 5.0963609019603706e-1, 7.3359187206010980e-4),
            Orbit::D(1.1641744231408617e-1, 6.4199784710823815e-1, 7.5713639786895192e-4),
            Orbit::D(1.5559223097876373e-1, 2.8313951210514487e-1, 6.4801058017836973e-4),
            Orbit::D(1.6662247234565036e-1, 4.3094229985984978e-1, 7.1308715821773823e-4),
            Orbit::D(1.7230806070938159e-1, 5.7073241448346113e-1, 7.4786466401447372e-4),
            Orbit::D(2.1395102374956809e-1, 3.4563294666435401e-1, 6.8958155298182297e-4),
            Orbit::D(2.2486323425925578e-1, 4.9217077552345806e-1, 7.3430171322796196e-4),
            Orbit::D(2.2975236575500246e-1, 6.2687240131450050e-1, 7.5503813779202820e-4),
            Orbit::D(2.7254235735639754e-1, 4.0639016975578862e-1, 7.1834488957552402e-4),
            Orbit::D(2.8223013097279975e-1, 5.4960323202551120e-1, 7.4725059655750563e-4),
            Orbit::D(3.3019373723439482e-1, 4.6463375312154470e-1, 7.3717636611113238e-4),
            Orbit::D(3.3766251401734304e-1, 6.0273566737213025e-1, 7.5369064289096735e-4),
            Orbit::D(3.8589084147626634e-1, 5.1964633884031319e-1, 7.4835172470526820e-4),
            Orbit::D(4.3870280398895206e-1, 5.7075229088922430e-1, 7.5382578598004631e-4),
        ],
    },
    LebedevRule {
        npoints: 1730,
        order: 71,
        orbits: &[
            Orbit::A1(6.3090494374209763e-5),
            Orbit::A2(6.3982877055717476e-4),
            Orbit::A3(6.3571850735307195e-4),
            Orbit::B(2.8609231261946620e-2, 2.2212071621881681e-4),
            Orbit::B(7.1425567677115220e-2, 3.4757840222868479e-4),
            Orbit::B(1.2091995409955590e-1, 4.3507424435898040e-4),
            Orbit::B(1.7386731065943789e-1, 4.9785691365221267e-4),
            Orbit::B(2.2846454384677339e-1, 5.4350362219980533e-4),
            Orbit::B(2.8348076717015119e-1, 5.7659133882195421e-4),
            Orbit::B(3.3796801454673392e-1, 6.0012003592260028e-4),
            Orbit::B(3.9113554548195367e-1, 6.1621781727175121e-4),
            Orbit::B(4.4228603530014032e-1, 6.2652181524384845e-4),
            Orbit::B(4.9077815687260568e-1, 6.3239871609742121e-4),
            Orbit::B(5.3600061532114684e-1, 6.3507678515405694e-4),
            Orbit::B(6.1421059735966033e-1, 6.3543627752971066e-4),
            Orbit::B(6.4593003879775035e-1, 6.3523024627062355e-4),
            Orbit::B(6.7180561250892246e-1, 6.3581178814179717e-4),
            Orbit::B(6.9108885331862535e-1, 6.3731015903101165e-4),
            Orbit::B(7.0304674168232517e-1, 6.3904289613686647e-4),
            Orbit::C(8.3549511663546461e-2, 3.1869134499465759e-4),
            Orbit::C(2.0501430090994860e-1, 4.6780285585917110e-4),
            Orbit::C(3.3702082907066372e-1, 5.5388296975986259e-4),
            Orbit::C(4.6890514842339631e-1, 6.0444759071904761e-4),
            Orbit::C(5.9394004245573340e-1, 6.3135751035090122e-4),
            Orbit::D(4.0975811620503427e-2, 1.3949833118322610e-1, 4.0786264318556302e-4),
            Orbit::D(4.7113225024232479e-2, 2.6869277727234148e-1, 5.1762689457378265e-4),
            Orbit::D(5.0633899343786710e-2, 4.0198514091795939e-1, 5.8296276771073420e-4),
            Orbit::D(5.2632450193385562e-2, 5.3137951248118909e-1, 6.2037789812388340e-4),
            Orbit::D(5.3547895365655400e-2, 6.5119043673761134e-1, 6.3754141703332328e-4),
            Orbit::D(8.8519873912933478e-2, 1.9679991804850139e-1, 4.7599330578127250e-4),
            Orbit::D(9.7844873039426947e-2, 3.3060068199048093e-1, 5.5648403133136924e-4),
            Orbit::D(1.0324222691606121e-1, 4.6356145674498000e-1, 6.0486933760811102e-4),
            Orbit::D(1.0610597309820050e-1, 5.8933179559319948e-1, 6.3084146712399794e-4),
            Orbit::D(1.3976801829698191e-1, 2.5461837325489672e-1, 5.2681511864134396e-4),
            Orbit::D(1.5053958100252729e-1, 3.9049068505949830e-1, 5.8564266710389799e-4),
            Orbit::D(1.5663220940062539e-1, 5.2158609315915749e-1, 6.2023623177324613e-4),
            Orbit::D(1.5941715640342211e-1, 6.4262463212158005e-1, 6.3627064669594981e-4),
            Orbit::D(1.9294525422265260e-1, 3.1212810747138747e-1, 5.6430485605073156e-4),
            Orbit::D(2.0397281562960501e-1, 4.4799579519043897e-1, 6.0663869257770911e-4),
            Orbit::D(2.0980828274910990e-1, 5.7582024990992708e-1, 6.2990053284037791e-4),
            Orbit::D(2.4678983370615620e-1, 3.6859810785024921e-1, 5.9145010766130726e-4),
            Orbit::D(2.5715299411211068e-1, 5.0270768489197803e-1, 6.2088249622344581e-4),
            Orbit::D(2.6188241145533908e-1, 6.2598936838767949e-1, 6.3477223906093525e-4),
            Orbit::D(3.0031041247854090e-1, 4.2337603215478559e-1, 6.1045612578741954e-4),
            Orbit::D(3.0921913758156699e-1, 5.5420873922602165e-1, 6.2963142978229066e-4),
            Orbit::D(3.5266843281750332e-1, 4.7586712360592459e-1, 6.2302528607078060e-4),
            Orbit::D(3.5938075061302760e-1, 6.0208508873751865e-1, 6.3404237567918592e-4),
            Orbit::D(4.0311348611457132e-1, 5.2551785797964634e-1, 6.3056187617607957e-4),
            Orbit::D(4.5094264483423507e-1, 5.7180256337345892e-1, 6.3430927675978892e-4),
        ],
    },
    LebedevRule {
        npoints: 2030,
        order: 77,
        orbits: &[
            Orbit::A1(4.6560318991974309e-5),
            Orbit::A3(5.4215491952955069e-4),
            Orbit::B(2.5408353368143479e-2, 1.7785221333465530e-4),
            Orbit::B(6.3993228005049155e-2, 2.8113254056827961e-4),
            Orbit::B(1.0882694698041250e-1, 3.5488963126314592e-4),
            Orbit::B(1.5706707988182869e-1, 4.0903108971733639e-4),
            Orbit::B(2.0711639322825140e-1, 4.4932861341699648e-4),
            Orbit::B(2.5789140444508440e-1, 4.7937284479627232e-4),
            Orbit::B(3.0856875581696230e-1, 5.0154153191642647e-4),
            Orbit::B(3.5847197062670239e-1, 5.1751273726779372e-4),
            Orbit::B(4.0701355944287088e-1, 5.2855222620810190e-4),
            Orbit::B(4.5366186262226382e-1, 5.3568327037139618e-4),
            Orbit::B(4.9791956864635772e-1, 5.3979147361751703e-4),
            Orbit::B(5.3930751111269992e-1, 5.4168994415999296e-4),
            Orbit::B(6.1156176768439163e-1, 5.4193084768899380e-4),
            Orbit::B(6.4143084351601587e-1, 5.4169369020305963e-4),
            Orbit::B(6.6640994127216069e-1, 5.4195443387031639e-4),
            Orbit::B(6.8591617712149133e-1, 5.4289836566309745e-4),
            Orbit::B(6.9936255935038905e-1, 5.4422865000981931e-4),
            Orbit::B(7.0623933877193801e-1, 5.4522503450573007e-4),
            Orbit::C(7.4790281683497634e-2, 2.5680024977285302e-4),
            Orbit::C(1.8489511539693659e-1, 3.8272117002921449e-4),
            Orbit::C(3.0595290665813052e-1, 4.5794915619178241e-4),
            Orbit::C(4.2855561010213622e-1, 5.0420039690835742e-4),
            Orbit::C(5.4687586534965260e-1, 5.3127088899760245e-4),
            Orbit::C(6.5658219783434391e-1, 5.4384017907471174e-4),
            Orbit::D(3.6819172264396412e-2, 1.2539015723671171e-1, 3.3160418731973442e-4),
            Orbit::D(4.2580401330439520e-2, 2.4315207325648630e-1, 4.2597973914687142e-4),
            Orbit::D(4.5993678871645918e-2, 3.6615967672617811e-1, 4.8427449179048662e-4),
            Orbit::D(4.8049787749532058e-2, 4.8743155525352039e-1, 5.1979962932824201e-4),
            Orbit::D(4.9163750157381080e-2, 6.0206283747139799e-1, 5.3909483550463135e-4),
            Orbit::D(7.9824876072133011e-2, 1.7757215103839410e-1, 3.8991135671537713e-4),
            Orbit::D(8.8694243067227216e-2, 3.0020968008958693e-1, 4.6049313684600211e-4),
            Orbit::D(9.4048937736544214e-2, 4.2376331535065809e-1, 5.0489260761881296e-4),
            Orbit::D(9.7168571993666644e-2, 5.4273373220590526e-1, 5.3111208366229447e-4),
            Orbit::D(9.8616215401270052e-2, 6.5292225298568807e-1, 5.4333127050278454e-4),
            Orbit::D(1.2646409665923350e-1, 2.3056933582161140e-1, 4.3433433272013089e-4),
            Orbit::D(1.3688117065106550e-1, 3.5585544574574318e-1, 4.8718148782552021e-4),
            Orbit::D(1.4313771090919711e-1, 4.7863284546584522e-1, 5.2026079804783727e-4),
            Orbit::D(1.4652058397950549e-1, 5.9434937472466998e-1, 5.3843093199569514e-4),
            Orbit::D(1.7515856834189569e-1, 2.8365028459920633e-1, 4.6794152623189192e-4),
            Orbit::D(1.8607399850150330e-1, 4.0977825370488868e-1, 5.0722429100748853e-4),
            Orbit::D(1.9241863888435701e-1, 5.3057020767897745e-1, 5.3099323883257427e-4),
            Orbit::D(1.9535794498035741e-1, 6.4213140335649432e-1, 5.4218595040518862e-4),
            Orbit::D(2.2479959076326700e-1, 3.3617947462325898e-1, 4.9308479816310307e-4),
            Orbit::D(2.3542350773958531e-1, 4.6163376660674582e-1, 5.2170698452353500e-4),
            Orbit::D(2.4115909447751899e-1, 5.7934362242317883e-1, 5.3774197708952084e-4),
            Orbit::D(2.7452992574222462e-1, 3.8759791722648240e-1, 5.1150318675400913e-4),
            Orbit::D(2.8420749213470109e-1, 5.1107070084178741e-1, 5.3157859662803105e-4),
            Orbit::D(2.8868714915836052e-1, 6.2470690170947474e-1, 5.4116963316777167e-4),
            Orbit::D(3.2363734824411178e-1, 4.3740193169990738e-1, 5.2452171484573666e-4),
            Orbit::D(3.3177844149841018e-1, 5.5774152861637949e-1, 5.3768337087589050e-4),
            Orbit::D(3.7149678594367408e-1, 4.8512758433400222e-1, 5.3320414998953209e-4),
            Orbit::D(3.7752990020407001e-1, 6.0130604313669500e-1, 5.4080320920695207e-4),
            Orbit::D(4.1753536463217450e-1, 5.3033918038068684e-1, 5.3845831260215425e-4),
            Orbit::D(4.6120844063554611e-1, 5.7261973805962874e-1, 5.4110672107988522e-4),
        ],
    },
    LebedevRule {
        npoints: 2354,
        order: 83,
        orbits: &[
            Orbit::A1(3.9226162706652920e-5),
            Orbit::A2(4.7038317508544240e-4),
            Orbit::A3(4.6782028012821362e-4),
            Orbit::B(2.2900246465305890e-2, 1.4378322289799000e-4),
            Orbit::B(5.7790866522712842e-2, 2.3035724935776441e-4),
            Orbit::B(9.8631035763759839e-2, 2.9331107524474542e-4),
            Orbit::B(1.4281557929821850e-1, 3.4029059983598382e-4),
            Orbit::B(1.8889781166014630e-1, 3.7591384668703718e-4),
            Orbit::B(2.3590916829702099e-1, 4.0306384478997978e-4),
            Orbit::B(2.8312288337061708e-1, 4.2365914322422112e-4),
            Orbit::B(3.2994958579666928e-1, 4.3905226569467459e-4),
            Orbit::B(3.7588408026607961e-1, 4.5025234666262471e-4),
            Orbit::B(4.2047518310094800e-1, 4.5805777277835411e-4),
            Orbit::B(4.6330685187510512e-1, 4.6313916166158988e-4),
            Orbit::B(5.0398494745073130e-1, 4.6609289536986759e-4),
            Orbit::B(5.4212657934407471e-1, 4.6747518079369530e-4),
            Orbit::B(6.0926602305573097e-1, 4.6764149039329198e-4),
            Orbit::B(6.3746542049848687e-1, 4.6740864923478702e-4),
            Orbit::B(6.6151364726098916e-1, 4.6749285394832071e-4),
            Orbit::B(6.8094872859581268e-1, 4.6807489796864472e-4),
            Orbit::B(6.9529800216651960e-1, 4.6904498063890401e-4),
            Orbit::B(7.0412454976953998e-1, 4.6998770758608179e-4),
            Orbit::C(6.7440330883060645e-2, 2.0999422810691760e-4),
            Orbit::C(1.6786844853341659e-1, 3.1722691507128040e-4),
            Orbit::C(2.7935590495396129e-1, 3.8320513585465230e-4),
            Orbit::C(3.9352642180576392e-1, 4.2521938181469852e-4),
            Orbit::C(5.0526292682325580e-1, 4.5138079637549997e-4),
            Orbit::C(6.1079053154375307e-1, 4.6577974691141779e-4),
            Orbit::D(3.3319548846625878e-2, 1.1350810398435240e-1, 2.7333628005228361e-4),
            Orbit::D(3.8736020406438948e-2, 2.2141315832189859e-1, 3.5495555764417081e-4),
            Orbit::D(4.2025634572880187e-2, 3.3528426349469492e-1, 4.0693605180203558e-4),
            Orbit::D(4.4091623783681741e-2, 4.4894853544920582e-1, 4.4005418237419729e-4),
            Orbit::D(4.5321734216371597e-2, 5.5812223308275144e-1, 4.5984944764555232e-4),
            Orbit::D(4.5899014872755828e-2, 6.5947614945004873e-1, 4.6914455391069862e-4),
            Orbit::D(7.2471674654365381e-2, 1.6128666260993779e-1, 3.2354853684635589e-4),
            Orbit::D(8.0894962569020123e-2, 2.7417965047500709e-1, 3.8561082452490098e-4),
            Orbit::D(8.6143097588708500e-2, 3.8919716298146700e-1, 4.2604428199191950e-4),
            Orbit::D(8.9390099177484889e-2, 5.0151368759331505e-1, 4.5145128901937968e-4),
            Orbit::D(9.1174880318403137e-2, 6.0747059841616946e-1, 4.6549169551520479e-4),
            Orbit::D(1.1515391108497450e-1, 2.1007865501682049e-1, 3.6249087260134527e-4),
            Orbit::D(1.2517321776208720e-1, 3.2597974391494849e-1, 4.0986228457568820e-4),
            Orbit::D(1.3145008793800009e-1, 4.4098755655422811e-1, 4.4086785080290632e-4),
            Orbit::D(1.3518060293833650e-1, 5.5113005505126234e-1, 4.5961986273475492e-4),
            Orbit::D(1.3692942131401550e-1, 6.5322725373790325e-1, 4.6847097795051372e-4),
            Orbit::D(1.5994910971436771e-1, 2.5922820094599419e-1, 3.9255400707128278e-4),
            Orbit::D(1.7062602864031851e-1, 3.7654411488268907e-1, 4.2863286042689501e-4),
            Orbit::D(1.7721896573838589e-1, 4.9048930585924838e-1, 4.5187481155485972e-4),
            Orbit::D(1.8083703550531960e-1, 5.9767204098579996e-1, 4.6486590168017808e-4),
            Orbit::D(2.0586999560280270e-1, 3.0817405613202031e-1, 4.1561297811162348e-4),
            Orbit::D(2.1651151473004079e-1, 4.2557735745305580e-1, 4.4278021989939452e-4),
            Orbit::D(2.2282771100502941e-1, 5.3750561387695495e-1, 4.5955648753751163e-4),
            Orbit::D(2.2578521923016021e-1, 6.4099563789893543e-1, 4.6755020171576731e-4),
            Orbit::D(2.5216249535029112e-1, 3.5642897815781638e-1, 4.3306449846232631e-4),
            Orbit::D(2.6220898122252589e-1, 4.7277951170584298e-1, 4.5304735114885607e-4),
            Orbit::D(2.6771799350143860e-1, 5.8182557086699693e-1, 4.6439887743158462e-4),
            Orbit::D(2.9820907857976742e-1, 4.0355872882407029e-1, 4.4596777259213119e-4),
            Orbit::D(3.0717214312962010e-1, 5.1785468958190117e-1, 4.6008054757031383e-4),
            Orbit::D(3.1136750355441650e-1, 6.2323348581449589e-1, 4.6688274916469459e-4),
            Orbit::D(3.4347620872357332e-1, 4.4916711963739031e-1, 4.5515930044567952e-4),
            Orbit::D(3.5089989988011377e-1, 5.6051411920974603e-1, 4.6445990599580168e-4),
            Orbit::D(3.8748313572034371e-1, 4.9288547829174889e-1, 4.6133414627499178e-4),
            Orbit::D(3.9291608761669311e-1, 6.0047633193525118e-1, 4.6672744557125080e-4),
            Orbit::D(4.2978148217469259e-1, 5.3436467919589881e-1, 4.6510196182698057e-4),
            Orbit::D(4.6994022609435371e-1, 5.7326832165309904e-1, 4.6702495361006252e-4),
        ],
    },
    LebedevRule {
        npoints: 2702,
        order: 89,
        orbits: &[
            Orbit::A1(2.9986751498881611e-5),
            Orbit::A3(4.0778605294953548e-4),
            Orbit::B(2.0655625388187032e-2, 1.1853491925206671e-4),
            Orbit::B(5.2509181730223793e-2, 1.9134086434257510e-4),
            Orbit::B(8.9934800820383756e-2, 2.4528865772098968e-4),
            Orbit::B(1.3060239244360189e-1, 2.8624081832887021e-4),
            Orbit::B(1.7320603885314181e-1, 3.1780322582573568e-4),
            Orbit::B(2.1687270848202489e-1, 3.4229456676336902e-4),
            Orbit::B(2.6095283091735860e-1, 3.6127905202359219e-4),
            Orbit::B(3.0492529279389519e-1, 3.7586382298185209e-4),
            Orbit::B(3.4834841380844039e-1, 3.8687117988599532e-4),
            Orbit::B(3.9083215491064061e-1, 3.9494299331899380e-4),
            Orbit::B(4.3202100718948139e-1, 4.0060681075411561e-4),
            Orbit::B(4.7158247958900529e-1, 4.0431921496727232e-4),
            Orbit::B(5.0919847940784535e-1, 4.0649474958080783e-4),
            Orbit::B(5.4455801456508035e-1, 4.0752456198131520e-4),
            Orbit::B(6.0725757968417682e-1, 4.0764235408935657e-4),
            Orbit::B(6.3394845057558025e-1, 4.0742808622515548e-4),
            Orbit::B(6.5707182574869583e-1, 4.0741637560122440e-4),
            Orbit::B(6.7625573300907094e-1, 4.0776477950712461e-4),
            Orbit::B(6.9111616969237899e-1, 4.0845175527825302e-4),
            Orbit::B(7.0128419116599605e-1, 4.0924684592240519e-4),
            Orbit::B(7.0645592724100204e-1, 4.0978726872409061e-4),
            Orbit::C(6.1235549898947653e-2, 1.7389868117450281e-4),
            Orbit::C(1.5330703483123931e-1, 2.6596160452801911e-4),
            Orbit::C(2.5639026052442060e-1, 3.2405960081715332e-4),
            Orbit::C(3.6293469916633608e-1, 3.6211959644329432e-4),
            Orbit::C(4.6839499689875380e-1, 3.8688383307605392e-4),
            Orbit::C(5.6944792406579525e-1, 4.0189115326931112e-4),
            Orbit::C(6.6344654309939555e-1, 4.0899294329832520e-4),
            Orbit::D(3.0345440090635840e-2, 1.0339585735523051e-1, 2.2799075277064090e-4),
            Orbit::D(3.5441225049761473e-2, 2.0273235862713890e-1, 2.9902369506641191e-4),
            Orbit::D(3.8601255231000588e-2, 3.0847807537919469e-1, 3.4542753513197040e-4),
            Orbit::D(4.0648291460525537e-2, 4.1511046627090908e-1, 3.7601209640627630e-4),
            Orbit::D(4.1943216760775177e-2, 5.1884562247462518e-1, 3.9546283792314061e-4),
            Orbit::D(4.2663988515488638e-2, 6.1675518803775475e-1, 4.0630187536646510e-4),
            Orbit::D(6.6188030442471346e-2, 1.4735214124143950e-1, 2.7152054905788968e-4),
            Orbit::D(7.4183043886463282e-2, 2.5169423751872733e-1, 3.2629517342128779e-4),
            Orbit::D(7.9289389871048666e-2, 3.5899882759202228e-1, 3.6299635370079200e-4),
            Orbit::D(8.2584245472947557e-2, 4.6498042750092178e-1, 3.8709695644180642e-4),
            Orbit::D(8.4576615519214984e-2, 5.6641907079427778e-1, 4.0176455088475300e-4),
            Orbit::D(8.5519258142383495e-2, 6.6071954183553827e-1, 4.0871912927996709e-4),
            Orbit::D(1.0544311289877149e-1, 1.9245521587059669e-1, 3.0579178967039762e-4),
            Orbit::D(1.1505027457271860e-1, 3.0002279952571809e-1, 3.4826346082424131e-4),
            Orbit::D(1.2126146430300870e-1, 4.0786284158819730e-1, 3.7701872338898729e-4),
            Orbit::D(1.2518419620272889e-1, 5.1246957570096618e-1, 3.9552877905340552e-4),
            Orbit::D(1.2736529325193960e-1, 6.1104643532831526e-1, 4.0590303486512928e-4),
            Orbit::D(1.4682635512388581e-1, 2.3810943628903281e-1, 3.3269130524525548e-4),
            Orbit::D(1.5719633712093639e-1, 3.4748066910463421e-1, 3.6565966817008919e-4),
            Orbit::D(1.6387708273826929e-1, 4.5492872588897348e-1, 3.8786086136943782e-4),
            Orbit::D(1.6791075059763311e-1, 5.5747111006062244e-1, 4.0153619113026680e-4),
            Orbit::D(1.6981732390763540e-1, 6.5264303020515635e-1, 4.0805658094848800e-4),
            Orbit::D(1.8944861081878861e-1, 2.8381217079367599e-1, 3.5373347118900368e-4),
            Orbit::D(1.9996318772471000e-1, 3.9381031803592093e-1, 3.7917404677942178e-4),
            Orbit::D(2.0659657982601759e-1, 5.0002785129572791e-1, 3.9590652702212740e-4),
            Orbit::D(2.1028050573587151e-1, 5.9985973332872267e-1, 4.0538369867195481e-4),
            Orbit::D(2.3263742387615791e-1, 3.2913231333734150e-1, 3.7005675007831289e-4),
            Orbit::D(2.4280734578465349e-1, 4.3875195904557029e-1, 3.8940344501569050e-4),
            Orbit::D(2.4894363788522350e-1, 5.4297850449281992e-1, 4.0152869754635700e-4),
            Orbit::D(2.5184180877741069e-1, 6.3950071485166005e-1, 4.0735786732991168e-4),
            Orbit::D(2.7584858084857677e-1, 3.7368969787414602e-1, 3.8252453725891219e-4),
            Orbit::D(2.8525751329061549e-1, 4.8205039600777871e-1, 3.9686002455083708e-4),
            Orbit::D(2.9048113689468907e-1, 5.8359398504917115e-1, 4.0508667856147169e-4),
            Orbit::D(3.1861793319969212e-1, 4.1714060407600129e-1, 3.9181251715182962e-4),
            Orbit::D(3.2688842086746389e-1, 5.2345737784751012e-1, 4.0199313514200502e-4),
            Orbit::D(3.3079419576666091e-1, 6.2168703534448555e-1, 4.0693201850519129e-4),
            Orbit::D(3.6053297963037939e-1, 4.5916779852569151e-1, 3.9847204199375789e-4),
            Orbit::D(3.6730333216759392e-1, 5.6273186472352821e-1, 4.0521088012785989e-4),
            Orbit::D(4.0121472535865088e-1, 4.9947338317184181e-1, 4.0297460033382107e-4),
            Orbit::D(4.0612115518302899e-1, 5.9963906071569539e-1, 4.0689786139409340e-4),
            Orbit::D(4.4030500255706922e-1, 5.3777318304450961e-1, 4.0574286321566269e-4),
            Orbit::D(4.7745659042774830e-1, 5.7379178300013312e-1, 4.0717192741148572e-4),
        ],
    },
    LebedevRule {
        npoints: 3074,
        order: 95,
        orbits: &[
            Orbit::A1(2.5990956100473471e-5),
            Orbit::A2(3.6031340894186710e-4),
            Orbit::A3(3.5860679753890452e-4),
            Orbit::B(1.8861061876275786e-2, 9.8315075530036798e-5),
            Orbit::B(4.8002157640438650e-2, 1.6050234680014695e-4),
            Orbit::B(8.2449215203235893e-2, 2.0722004464344059e-4),
            Orbit::B(1.2004083457273496e-1, 2.4312977328994265e-4),
            Orbit::B(1.5957735253446795e-1, 2.7118190986332141e-4),
            Orbit::B(2.0026359711559788e-1, 2.9327620481264561e-4),
            Orbit::B(2.4151275888219484e-1, 3.1070325173875675e-4),
            Orbit::B(2.8285841575082016e-1, 3.2438080604703227e-4),
            Orbit::B(3.2390910145888824e-1, 3.3498990925293493e-4),
            Orbit::B(3.6432250973621050e-1, 3.4305806895291958e-4),
            Orbit::B(4.0378970832234806e-1, 3.4901241102360290e-4),
            Orbit::B(4.4202475148493586e-1, 3.5321489494631131e-4),
            Orbit::B(4.7875725382342937e-1, 3.5598626699585883e-4),
            Orbit::B(5.1372652511437755e-1, 3.5762243184732031e-4),
            Orbit::B(5.4667640566013975e-1, 3.5840505340441783e-4),
            Orbit::B(6.0548594208409134e-1, 3.5849035823224957e-4),
            Orbit::B(6.3081067017967540e-1, 3.5829918798959949e-4),
            Orbit::B(6.5303692302011596e-1, 3.5823711886500640e-4),
            Orbit::B(6.7186095246164934e-1, 3.5843536315744373e-4),
            Orbit::B(6.8696764998874671e-1, 3.5891201667055038e-4),
            Orbit::B(6.9804670772321809e-1, 3.5954457044801711e-4),
            Orbit::B(7.0482417212470838e-1, 3.6009435568977531e-4),
            Orbit::C(5.5911021577402319e-2, 1.4564473644560285e-4),
            Orbit::C(1.4073840767509230e-1, 2.2523702026198375e-4),
            Orbit::C(2.3640354376201828e-1, 2.7661354405808281e-4),
            Orbit::C(3.3606027367125196e-1, 3.1107294915547060e-4),
            Orbit::C(4.3562926295599480e-1, 3.3425067128956020e-4),
            Orbit::C(5.3215694152117610e-1, 3.4919818345517846e-4),
            Orbit::C(6.2329563051358661e-1, 3.5760036043528483e-4),
            Orbit::D(2.7787479246278925e-2, 9.4698694081674500e-2, 1.9219216144862391e-4),
            Orbit::D(3.2591448499103517e-2, 1.8654070264577968e-1, 2.5434913259998282e-4),
            Orbit::D(3.5621495078424513e-2, 2.8504254231240683e-1, 2.9586445921157964e-4),
            Orbit::D(3.7632248782963687e-2, 3.8521911845965701e-1, 3.2397487632263868e-4),
            Orbit::D(3.8959026096970946e-2, 4.8369364599685416e-1, 3.4265221182534891e-4),
            Orbit::D(3.9772096894832944e-2, 5.7786927161206303e-1, 3.5411962054451249e-4),
            Orbit::D(4.0159559580610626e-2, 6.6562630895452990e-1, 3.5958550344792153e-4),
            Orbit::D(6.0765697172843795e-2, 1.3531702817732147e-1, 2.3014583333381156e-4),
            Orbit::D(6.8356795028989767e-2, 2.3211864524727863e-1, 2.7867110488147425e-4),
            Orbit::D(7.3303188829802177e-2, 3.3246194319654243e-1, 3.1195481291008861e-4),
            Orbit::D(7.6595819329443315e-2, 4.3250250605576657e-1, 3.3454917848338466e-4),
            Orbit::D(7.8712468179790912e-2, 5.2937925625999194e-1, 3.4918487706664956e-4),
            Orbit::D(7.9901575929951632e-2, 6.2079042881450575e-1, 3.5742969116200456e-4),
            Orbit::D(9.7030727133063682e-2, 1.7716794756162538e-1, 2.6042485840959150e-4),
            Orbit::D(1.0622848639299562e-1, 2.7731591413978907e-1, 2.9855523599529139e-4),
            Orbit::D(1.1232262955395207e-1, 3.7858483322830760e-1, 3.2507452254990283e-4),
            Orbit::D(1.1633813057906467e-1, 4.7784862294303893e-1, 3.4291261780220573e-4),
            Orbit::D(1.1879638081098834e-1, 5.7262812530770313e-1, 3.5393182355707029e-4),
            Orbit::D(1.1996713088079750e-1, 6.6086881710632361e-1, 3.5919932797394047e-4),
            Orbit::D(1.3541124565557416e-1, 2.1970666617450704e-1, 2.8452754351283594e-4),
            Orbit::D(1.4544044086897268e-1, 3.2192001912749357e-1, 3.1458679290522965e-4),
            Orbit::D(1.5210841928572494e-1, 4.2328910280039822e-1, 3.3551534166960677e-4),
            Orbit::D(1.5638905985063861e-1, 5.2116636928247428e-1, 3.4924203437082090e-4),
            Orbit::D(1.5879147080410266e-1, 6.1336587761425565e-1, 3.5702314386274560e-4),
            Orbit::D(1.7509964785725654e-1, 2.6247835559475086e-1, 3.0368709006095107e-4),
            Orbit::D(1.8540182819366399e-1, 3.6570325931767395e-1, 3.2732906625951573e-4),
            Orbit::D(1.9218444587959654e-1, 4.6642870504371930e-1, 3.4358475693436677e-4),
            Orbit::D(1.9633208099919200e-1, 5.6234695047164784e-1, 3.5373990506898525e-4),
            Orbit::D(1.9830585752620750e-1, 6.5150854918300316e-1, 3.5862073351648933e-4),
            Orbit::D(2.1548969065435647e-1, 3.0509695201948145e-1, 3.1884148335102391e-4),
            Orbit::D(2.2562974114215398e-1, 4.0843767777701095e-1, 3.3727055127406760e-4),
            Orbit::D(2.3213609893502204e-1, 5.0784584934397792e-1, 3.4957868323259032e-4),
            Orbit::D(2.3578474071890362e-1, 6.0127181885454395e-1, 3.5662091530143180e-4),
            Orbit::D(2.5609546249772541e-1, 3.4722526364090212e-1, 3.3070464157246998e-4),
            Orbit::D(2.6571044245075726e-1, 4.4990049452858943e-1, 3.4482744386894136e-4),
            Orbit::D(2.7158864861440318e-1, 5.4737798159706319e-1, 3.5377678061382568e-4),
            Orbit::D(2.7438461212244508e-1, 6.3781792063181697e-1, 3.5810843222771341e-4),
            Orbit::D(2.9650700499873267e-1, 3.8856102184011865e-1, 3.3983309700017379e-4),
            Orbit::D(3.0527554872598817e-1, 4.8987581409570330e-1, 3.5035927838369073e-4),
            Orbit::D(3.1019247074452722e-1, 5.8486171336424497e-1, 3.5644598159849481e-4),
            Orbit::D(3.3636414882274596e-1, 4.2882737755639039e-1, 3.4667579006284827e-4),
            Orbit::D(3.4398639203901760e-1, 5.2815474419862629e-1, 3.5418547934063747e-4),
            Orbit::D(3.4761210528141756e-1, 6.2013482815013277e-1, 3.5784640618239630e-4),
            Orbit::D(3.7534000294582992e-1, 4.6776624709169762e-1, 3.5160959241028794e-4),
            Orbit::D(3.8152294559577099e-1, 5.6453469896315100e-1, 3.5659955186530273e-4),
            Orbit::D(4.1312975218821829e-1, 5.0513335892784739e-1, 3.5496451848999707e-4),
            Orbit::D(4.1757524208579516e-1, 5.9881812520844802e-1, 3.5788020790922958e-4),
            Orbit::D(4.4944237759140554e-1, 5.4069421456460731e-1, 3.5704159703097571e-4),
            Orbit::D(4.8399389587401892e-1, 5.7422041225157550e-1, 3.5812517994057518e-4),
        ],
    },
    LebedevRule {
        npoints: 3470,
        order: 101,
        orbits: &[
            Orbit::A1(2.0403827308277824e-5),
            Orbit::A3(3.1781497038895358e-4),
            Orbit::B(1.7214208329062335e-2, 8.2881151280742865e-5),
            Orbit::B(4.4088753749817709e-2, 1.3608831925230070e-4),
            Orbit::B(7.5946808138786820e-2, 1.7668544545426700e-4),
            Orbit::B(1.1083353592047993e-1, 2.0831531612301279e-4),
            Orbit::B(1.4765170543885672e-1, 2.3332795446571704e-4),
            Orbit::B(1.8567318708606154e-1, 2.5328095399303440e-4),
            Orbit::B(2.2436340994288212e-1, 2.6924721842111357e-4),
            Orbit::B(2.6330068816627278e-1, 2.8199499468118853e-4),
            Orbit::B(3.0213409049162837e-1, 2.9209535939729754e-4),
            Orbit::B(3.4055940480300895e-1, 2.9998897829483626e-4),
            Orbit::B(3.7830444340073727e-1, 3.0602921204969061e-4),
            Orbit::B(4.1511947674079114e-1, 3.1051091675221999e-4),
            Orbit::B(4.5077057664432574e-1, 3.1369023875503179e-4),
            Orbit::B(4.8503460565731876e-1, 3.1579846524546867e-4),
            Orbit::B(5.1769508177924706e-1, 3.1705165184254294e-4),
            Orbit::B(5.4853842408209896e-1, 3.1765684256337566e-4),
            Orbit::B(6.0391172389433090e-1, 3.1771984112070780e-4),
            Orbit::B(6.2799566555731146e-1, 3.1755194923947306e-4),
            Orbit::B(6.4936361695689526e-1, 3.1746549526347168e-4),
            Orbit::B(6.6776441177045054e-1, 3.1756764154676655e-4),
            Orbit::B(6.8293685721156250e-1, 3.1789234178354473e-4),
            Orbit::B(6.9461958181841221e-1, 3.1837882875318979e-4),
            Orbit::B(7.0257115420570271e-1, 3.1887551519187992e-4),
            Orbit::B(7.0660047671401205e-1, 3.1919168893138034e-4),
            Orbit::C(5.1325376899460623e-2, 1.2317796117446514e-4),
            Orbit::C(1.2979946613312249e-1, 1.9246613738398878e-4),
            Orbit::C(2.1888520494013070e-1, 2.3808818674034179e-4),
            Orbit::C(3.1231748249034569e-1, 2.6931006630379029e-4),
            Orbit::C(4.0640376207381951e-1, 2.9086733828343592e-4),
            Orbit::C(4.9849583969447814e-1, 3.0539146193815089e-4),
            Orbit::C(5.8649750460213612e-1, 3.1439166841477288e-4),
            Orbit::C(6.6867116345801758e-1, 3.1870422440553620e-4),
            Orbit::D(2.5571752333675885e-2, 8.7157387808359840e-2, 1.6352195358697771e-4),
            Orbit::D(3.0106305978811060e-2, 1.7239814375928095e-1, 2.1821889098126140e-4),
            Orbit::D(3.3009394290725504e-2, 2.6442158523507320e-1, 2.5545753989674179e-4),
            Orbit::D(3.4973543864500418e-2, 3.5868945695570659e-1, 2.8123884160317859e-4),
            Orbit::D(3.6310553658670024e-2, 4.5216110650871966e-1, 2.9894003369014164e-4),
            Orbit::D(3.7182013061189435e-2, 5.4251514487072117e-1, 3.1050971610239135e-4),
            Orbit::D(3.7675599302457202e-2, 6.2785739683751041e-1, 3.1706636591560989e-4),
            Orbit::D(5.6048233833766892e-2, 1.2483831231340090e-1, 1.9681099176960780e-4),
            Orbit::D(6.3260315542046974e-2, 2.1495532578445978e-1, 2.3997279339214105e-4),
            Orbit::D(6.8038876500785009e-2, 3.0901137434430631e-1, 2.7017040691356558e-4),
            Orbit::D(7.1297367397570935e-2, 4.0352666100194406e-1, 2.9121375002880758e-4),
            Orbit::D(7.3483184684843467e-2, 4.9593656515609613e-1, 3.0545558839476644e-4),
            Orbit::D(7.4836163350673460e-2, 5.8418605569079307e-1, 3.1430141178906092e-4),
            Orbit::D(7.5484433013601582e-2, 6.6656117112645774e-1, 3.1854479446255236e-4),
            Orbit::D(8.9685686019007588e-2, 1.6380626933833772e-1, 2.2367543422499667e-4),
            Orbit::D(9.8485669802586315e-2, 2.5732560812474220e-1, 2.5797961335146676e-4),
            Orbit::D(1.0443261362067088e-1, 3.5258710791978082e-1, 2.8236934134689572e-4),
            Orbit::D(1.0847586201931646e-1, 4.4677753123325081e-1, 2.9932412565021827e-4),
            Orbit::D(1.1110876438126480e-1, 5.3768158040382830e-1, 3.1047649608077321e-4),
            Orbit::D(1.1259908342661200e-1, 6.2346321868515009e-1, 3.1681728662871257e-4),
            Orbit::D(1.2540866519762800e-1, 2.0355862033731778e-1, 2.4531866870171776e-4),
            Orbit::D(1.3508359523842658e-1, 2.9931637512381060e-1, 2.7271140526235289e-4),
            Orbit::D(1.4167515975176787e-1, 3.9504180053540278e-1, 2.9228984632142835e-4),
            Orbit::D(1.4609156892417724e-1, 4.8836383466085442e-1, 3.0571017389838256e-4),
            Orbit::D(1.4882260851454082e-1, 5.7733144802437686e-1, 3.1410158259776599e-4),
            Orbit::D(1.5013038131576192e-1, 6.6029345518488436e-1, 3.1814018655709444e-4),
            Orbit::D(1.6247801501620132e-1, 2.4367989752937758e-1, 2.6275517915805329e-4),
            Orbit::D(1.7251840554421810e-1, 3.4072380051480006e-1, 2.8463276562813364e-4),
            Orbit::D(1.7934086105048208e-1, 4.3624756634301631e-1, 3.0018290621624876e-4),
            Orbit::D(1.8377908323699801e-1, 5.2819083484346008e-1, 3.1053193262514282e-4),
            Orbit::D(1.8628922741351511e-1, 6.1481132455750565e-1, 3.1645206211598889e-4),
            Orbit::D(2.0034223426832082e-1, 2.8382075077738061e-1, 2.7676548601522372e-4),
            Orbit::D(2.1035592797307257e-1, 3.8134549784832650e-1, 2.9414911020513441e-4),
            Orbit::D(2.1706307501757224e-1, 4.7606618121458549e-1, 3.0628908645429257e-4),
            Orbit::D(2.2120753908740207e-1, 5.6615426871493102e-1, 3.1395655144281741e-4),
            Orbit::D(2.2319097017144560e-1, 6.5004074628423802e-1, 3.1766523059121872e-4),
            Orbit::D(2.3856280262552634e-1, 3.2367875022176928e-1, 2.8794670277658901e-4),
            Orbit::D(2.4822787745548602e-1, 4.2098481044233438e-1, 3.0160494921361030e-4),
            Orbit::D(2.5451451578158069e-1, 5.1435510425121045e-1, 3.1083282792647486e-4),
            Orbit::D(2.5806828411609856e-1, 6.0214501020314526e-1, 3.1615430068063710e-4),
            Orbit::D(2.7677311487835782e-1, 3.6298495548406912e-1, 2.9676399189187172e-4),
            Orbit::D(2.8580995099828832e-1, 4.5945196999963006e-1, 3.0729497261756158e-4),
            Orbit::D(2.9139401017066013e-1, 5.5097090269355986e-1, 3.1402431462012058e-4),
            Orbit::D(2.9406563620941212e-1, 6.3605207836100486e-1, 3.1729859606133119e-4),
            Orbit::D(3.1465423082453087e-1, 4.0149480819920857e-1, 3.0359006846603982e-4),
            Orbit::D(3.2280756599154287e-1, 4.9656401661859312e-1, 3.1147681428864480e-4),
            Orbit::D(3.2741699109107053e-1, 5.8577110303294277e-1, 3.1606380309771599e-4),
            Orbit::D(3.5191964158950878e-1, 4.3898183792602252e-1, 3.0873382372983147e-4),
            Orbit::D(3.5894599072041505e-1, 5.3214416555715605e-1, 3.1438236736662409e-4),
            Orbit::D(3.6230813293172653e-1, 6.1861499174043921e-1, 3.1714628822062735e-4),
            Orbit::D(3.8830509840236538e-1, 4.7523311436743770e-1, 3.1246088388601595e-4),
            Orbit::D(3.9396300888643099e-1, 5.6602084385821649e-1, 3.1622697646615090e-4),
            Orbit::D(4.2356134239086490e-1, 5.1004573183740176e-1, 3.1500842942267350e-4),
            Orbit::D(4.2760299229490895e-1, 5.9802643159643643e-1, 3.1721646637598340e-4),
            Orbit::D(4.5744847171962200e-1, 5.4322383889548675e-1, 3.1659583985983963e-4),
            Orbit::D(4.8973116392555233e-1, 5.7457586850724407e-1, 3.1743204409573448e-4),
        ],
    },
    LebedevRule {
        npoints: 3890,
        order: 107,
        orbits: &[
            Orbit::A1(1.8073952521966702e-5),
            Orbit::A2(2.8480087822388059e-4),
            Orbit::A3(2.8360658375305457e-4),
            Orbit::B(1.5878764198583521e-2, 7.0131492666738131e-5),
            Orbit::B(4.0691935937512067e-2, 1.1627980219567058e-4),
            Orbit::B(7.0258881152579986e-2, 1.5187285839721203e-4),
            Orbit::B(1.0274954500287041e-1, 1.7987961082169634e-4),
            Orbit::B(1.3714577308934259e-1, 2.0225933859728025e-4),
            Orbit::B(1.7277585326719533e-1, 2.2030931055754620e-4),
            Orbit::B(2.0914920389290373e-1, 2.3492942342998290e-4),
            Orbit::B(2.4588132817519154e-1, 2.4676820587470462e-4),
            Orbit::B(2.8265458594500664e-1, 2.5630926835722384e-4),
            Orbit::B(3.1919572917996225e-1, 2.6392538967632835e-4),
            Orbit::B(3.5526214692995783e-1, 2.6991374792651064e-4),
            Orbit::B(3.9063295034062301e-1, 2.7451964201667179e-4),
            Orbit::B(4.2510286140930309e-1, 2.7795291973975862e-4),
            Orbit::B(4.5847775201118701e-1, 2.8039960866842872e-4),
            Orbit::B(4.9057113587101936e-1, 2.8203023567158290e-4),
            Orbit::B(5.2120116698473862e-1, 2.8300567474910990e-4),
            Orbit::B(5.5018784887379946e-1, 2.8348089507768424e-4),
            Orbit::B(6.0250378774793434e-1, 2.8352823390789193e-4),
            Orbit::B(6.2545726895490172e-1, 2.8338192670658178e-4),
            Orbit::B(6.4601071795282494e-1, 2.8328583369068147e-4),
            Orbit::B(6.6395411381542524e-1, 2.8332682354512817e-4),
            Orbit::B(6.7906885156674957e-1, 2.8354326770292469e-4),
            Orbit::B(6.9113385803715133e-1, 2.8390917227430365e-4),
            Orbit::B(6.9993859561264915e-1, 2.8433081788757772e-4),
            Orbit::B(7.0530377486568974e-1, 2.8467035505337786e-4),
            Orbit::C(4.7322243871801152e-2, 1.0511934069719418e-4),
            Orbit::C(1.2021005293268031e-1, 1.6578718387969763e-4),
            Orbit::C(2.0343048206648551e-1, 2.0646481137142164e-4),
            Orbit::C(2.9122856435730021e-1, 2.3479427458197229e-4),
            Orbit::C(3.8023617927267678e-1, 2.5477753265977184e-4),
            Orbit::C(4.6805985110561460e-1, 2.6868766848470491e-4),
            Orbit::C(5.5281510521555988e-1, 2.7786657555159199e-4),
            Orbit::C(6.3293863078030410e-1, 2.8309966167828983e-4),
            Orbit::D(2.3634546840031238e-2, 8.0565166513690709e-2, 1.4030633401683864e-4),
            Orbit::D(2.7923575900489894e-2, 1.5995987382863444e-1, 1.8866955652849745e-4),
            Orbit::D(3.0704231668333679e-2, 2.4616870223335963e-1, 2.2216799703545352e-4),
            Orbit::D(3.2615899346347461e-2, 3.3503378305657266e-1, 2.4579959567448483e-4),
            Orbit::D(3.3948778486643516e-2, 4.2379511195370678e-1, 2.6244749011317668e-4),
            Orbit::D(3.4855606438007183e-2, 5.1036165772516884e-1, 2.7381652369628596e-4),
            Orbit::D(3.5421893395616716e-2, 5.9303140175333835e-1, 2.8092339076109165e-4),
            Orbit::D(3.5694552688208092e-2, 6.7037152710499215e-1, 2.8434552060088096e-4),
            Orbit::D(5.1912916325459413e-2, 1.1564760771393902e-1, 1.6965041259394683e-4),
            Orbit::D(5.8771410381390658e-2, 1.9980974125009515e-1, 2.0818678827482239e-4),
            Orbit::D(6.3380346692818890e-2, 2.8817745662868327e-1, 2.3561857342707234e-4),
            Orbit::D(6.6584389280815726e-2, 3.7757732247582843e-1, 2.5514744075036936e-4),
            Orbit::D(6.8802195562914489e-2, 4.6569186832349302e-1, 2.6880341630393839e-4),
            Orbit::D(7.0263086315120349e-2, 5.5067387925806821e-1, 2.7783652082032139e-4),
            Orbit::D(7.1095740403695470e-2, 6.3098122533901746e-1, 2.8299308097427323e-4),
            Orbit::D(8.3227157369945057e-2, 1.5204733827604189e-1, 1.9357872427454040e-4),
            Orbit::D(9.1645739146913846e-2, 2.3962289525662037e-1, 2.2451486806007807e-4),
            Orbit::D(9.7428624870679381e-2, 3.2939636041169773e-1, 2.4692283448056137e-4),
            Orbit::D(1.0145657971579541e-1, 4.1881552298489738e-1, 2.6290653351953273e-4),
            Orbit::D(1.0419468597216348e-1, 5.0588570691859802e-1, 2.7389327512876828e-4),
            Orbit::D(1.0590350612964029e-1, 5.8895730409952918e-1, 2.8078529404189329e-4),
            Orbit::D(1.0672597922827301e-1, 6.6662960113532310e-1, 2.8410978741114638e-4),
            Orbit::D(1.1658556679937117e-1, 1.8929866997459310e-1, 2.1306145105219685e-4),
            Orbit::D(1.2590496419626873e-1, 2.7922283410977466e-1, 2.3803704915119049e-4),
            Orbit::D(1.3237995322822899e-1, 3.6973038222413762e-1, 2.5627263486420666e-4),
            Orbit::D(1.3685733208438222e-1, 4.5868058920093446e-1, 2.6919004499250667e-4),
            Orbit::D(1.3980397387363933e-1, 5.4432046667139966e-1, 2.7779447912425177e-4),
            Orbit::D(1.4148239252360256e-1, 6.2516415895169297e-1, 2.8272459496747469e-4),
            Orbit::D(1.5130771674095031e-1, 2.2701944467777913e-1, 2.2893812659310564e-4),
            Orbit::D(1.6105948234008627e-1, 3.1842511075467406e-1, 2.4913980418523598e-4),
            Orbit::D(1.6784970181293365e-1, 4.0906630231351282e-1, 2.6387567267530316e-4),
            Orbit::D(1.7246148519516080e-1, 4.9708957142242349e-1, 2.7412754857542872e-4),
            Orbit::D(1.7533733811961552e-1, 5.8092988137597434e-1, 2.8060116616609939e-4),
            Orbit::D(1.7672079082145298e-1, 6.5924149215701777e-1, 2.8373423448298208e-4),
            Orbit::D(1.8688820258078601e-1, 2.6489081850932739e-1, 2.4186302928161829e-4),
            Orbit::D(1.9671516534608982e-1, 3.5704811644262446e-1, 2.5816324058812641e-4),
            Orbit::D(2.0350951053261138e-1, 4.4728193554117113e-1, 2.6993111573909149e-4),
            Orbit::D(2.0797793814164123e-1, 5.3395051339607480e-1, 2.7785309701226101e-4),
            Orbit::D(2.1052157935140098e-1, 6.1564160394471268e-1, 2.8241814565975167e-4),
            Orbit::D(2.2292776297762235e-1, 3.0263892595741360e-1, 2.5234004956311889e-4),
            Orbit::D(2.3254046061751676e-1, 3.9491647104921440e-1, 2.6539655062274130e-4),
            Orbit::D(2.3906925666720907e-1, 4.8425133772314372e-1, 2.7462332684037729e-4),
            Orbit::D(2.4313857883222878e-1, 5.6916657925314385e-1, 2.8050105676467272e-4),
            Orbit::D(2.4509533121570506e-1, 6.4838013510666026e-1, 2.8335852165778592e-4),
            Orbit::D(2.5909518407462356e-1, 3.4002202961513850e-1, 2.6076239734495798e-4),
            Orbit::D(2.6824611411514387e-1, 4.3186172939705036e-1, 2.7108572167470785e-4),
            Orbit::D(2.7426498180761483e-1, 5.1984776299629265e-1, 2.7812256744547462e-4),
            Orbit::D(2.7769018830498532e-1, 6.0263876826803775e-1, 2.8220558340310539e-4),
            Orbit::D(2.9510472917508468e-1, 3.7682179533355092e-1, 2.6744410326892524e-4),
            Orbit::D(3.0357201160119734e-1, 4.6772210099316791e-1, 2.7544340939036780e-4),
            Orbit::D(3.0885038065800940e-1, 5.5394530118831453e-1, 2.8058812540456940e-4),
            Orbit::D(3.1138813563866319e-1, 6.3426761501633067e-1, 2.8310169012434196e-4),
            Orbit::D(3.3070197141699303e-1, 4.1283729009218845e-1, 2.7264323603433464e-4),
            Orbit::D(3.3827818591974390e-1, 5.0234179392709544e-1, 2.7865799325193656e-4),
            Orbit::D(3.4259042459066136e-1, 5.8641967624012503e-1, 2.8217198770048759e-4),
            Orbit::D(3.6565441010876337e-1, 4.4788071318156292e-1, 2.7657876859245350e-4),
            Orbit::D(3.7213830656259417e-1, 5.3557018366361275e-1, 2.8090110806794832e-4),
            Orbit::D(3.7525622947894682e-1, 6.1714844666683910e-1, 2.8302225023331157e-4),
            Orbit::D(3.9974489519396955e-1, 4.8177420340892563e-1, 2.7944286906422350e-4),
            Orbit::D(4.0493463604660557e-1, 5.6726084513287722e-1, 2.8233361845609754e-4),
            Orbit::D(4.3276671108120235e-1, 5.1434728146533437e-1, 2.8140990020629014e-4),
            Orbit::D(4.3645380986338017e-1, 5.9727042025401622e-1, 2.8311011758062643e-4),
            Orbit::D(4.6451961235322931e-1, 5.4543462139056498e-1, 2.8264295315790037e-4),
            Orbit::D(4.9480635557033448e-1, 5.7487393131702524e-1, 2.8329835425508693e-4),
        ],
    },
    LebedevRule {
        npoints: 4334,
        order: 113,
        orbits: &[
            Orbit::A1(1.4490630225386790e-5),
            Orbit::A3(2.5463773298284114e-4),
            Orbit::B(1.4628961518310134e-2, 6.0184329610872272e-5),
            Orbit::B(3.7698408124931394e-2, 1.0022865832636954e-4),
            Orbit::B(6.5247019040968926e-2, 1.3152229310280940e-4),
            Orbit::B(9.5605434161346495e-2, 1.5642137468767440e-4),
            Orbit::B(1.2783358989291979e-1, 1.7651188415076813e-4),
            Orbit::B(1.6130961044660311e-1, 1.9287370993110667e-4),
            Orbit::B(1.9558062257453712e-1, 2.0626585342632824e-4),
            Orbit::B(2.3029352184980284e-1, 2.1723954459538025e-4),
            Orbit::B(2.6515843441130277e-1, 2.2620761888760197e-4),
            Orbit::B(2.9992768251832091e-1, 2.3348856994623895e-4),
            Orbit::B(3.3438286697187986e-1, 2.3933552731792088e-4),
            Orbit::B(3.6832650137505185e-1, 2.4395592004688651e-4),
            Orbit::B(4.0157632065181093e-1, 2.4752518660599906e-4),
            Orbit::B(4.3396120263997706e-1, 2.5019655581587998e-4),
            Orbit::B(4.6531806511145829e-1, 2.5210814079259304e-4),
            Orbit::B(4.9548933310808035e-1, 2.5338810023880571e-4),
            Orbit::B(5.2432070689249310e-1, 2.5415829008482730e-4),
            Orbit::B(5.5165904790417042e-1, 2.5453657375258649e-4),
            Orbit::B(6.0123719278041776e-1, 2.5457269930667978e-4),
            Orbit::B(6.2315744664498196e-1, 2.5444561974655291e-4),
            Orbit::B(6.4294165141812720e-1, 2.5434815968810258e-4),
            Orbit::B(6.6041242729435956e-1, 2.5435064514292132e-4),
            Orbit::B(6.7538514704082508e-1, 2.5449056754937464e-4),
            Orbit::B(6.8767179706261616e-1, 2.5476114073444281e-4),
            Orbit::B(6.9708950613192355e-1, 2.5510603754488772e-4),
            Orbit::B(7.0347469125533113e-1, 2.5542919338160754e-4),
            Orbit::B(7.0670172175422963e-1, 2.5562557106863898e-4),
            Orbit::C(4.3822235011311231e-2, 9.0413396951177647e-5),
            Orbit::C(1.1174740774000060e-1, 1.4384263300790272e-4),
            Orbit::C(1.8971532529114399e-1, 1.8025230898205394e-4),
            Orbit::C(2.7240230099103308e-1, 2.0600522905654439e-4),
            Orbit::C(3.5671633087099019e-1, 2.2450022489675013e-4),
            Orbit::C(4.4047844830280869e-1, 2.3770598477310757e-4),
            Orbit::C(5.2198331541614107e-1, 2.4681189558825107e-4),
            Orbit::C(5.9981798689775534e-1, 2.5254108729665548e-4),
            Orbit::C(6.7278031545482220e-1, 2.5531014099334246e-4),
            Orbit::D(2.1931685094611828e-2, 7.4765639431660785e-2, 1.2128797336686499e-4),
            Orbit::D(2.5993819932670179e-2, 1.4895157468400283e-1, 1.6425955378251595e-4),
            Orbit::D(2.8657576640575857e-2, 2.2992277008561585e-1, 1.9448170130479094e-4),
            Orbit::D(3.0513746375072780e-2, 3.1384611106721128e-1, 2.1615092506884032e-4),
            Orbit::D(3.1832914587498200e-2, 3.9819867084234056e-1, 2.3173809758629923e-4),
            Orbit::D(3.2759178077438979e-2, 4.8108351587954090e-1, 2.4273532852015157e-4),
            Orbit::D(3.3375009402313340e-2, 5.6096246129981020e-1, 2.5005833600484493e-4),
            Orbit::D(3.3727994607370221e-2, 6.3653843645858210e-1, 2.5425695070091715e-4),
            Orbit::D(4.8264192815338870e-2, 1.0753414820014158e-1, 1.4728728812709145e-4),
            Orbit::D(5.4792865324621888e-2, 1.8636564443517664e-1, 1.8182466598493099e-4),
            Orbit::D(5.9234216844859966e-2, 2.6957529985532686e-1, 2.0678623627466716e-4),
            Orbit::D(6.2371112337307563e-2, 3.5424958720505700e-1, 2.2487785134378283e-4),
            Orbit::D(6.4595481938809068e-2, 4.3827911821332988e-1, 2.3785507337198110e-4),
            Orbit::D(6.6125461839671967e-2, 5.1999250413243436e-1, 2.4682580397443720e-4),
            Orbit::D(6.7087503359018599e-2, 5.9799596599846661e-1, 2.5247776382601402e-4),
            Orbit::D(6.7552493096779825e-2, 6.7109943028992713e-1, 2.5521141275802663e-4),
            Orbit::D(7.7511918835757393e-2, 1.4163448852032584e-1, 1.6868466010108596e-4),
            Orbit::D(8.5567632514252590e-2, 2.2386028803563493e-1, 1.9665656494924016e-4),
            Orbit::D(9.1178177760577198e-2, 3.0861787166113908e-1, 2.1724407346491173e-4),
            Orbit::D(9.5162239524019088e-2, 3.9357515531201814e-1, 2.3223888034045923e-4),
            Orbit::D(9.7957570370879515e-2, 4.7692330572181663e-1, 2.4288844567391292e-4),
            Orbit::D(9.9814983314741798e-2, 5.5717176922074929e-1, 2.5000609564403327e-4),
            Orbit::D(1.0087921264248494e-1, 6.3305237110540036e-1, 2.5409511938607202e-4),
            Orbit::D(1.0875581392476794e-1, 1.7663253153885849e-1, 1.8626984146602311e-4),
            Orbit::D(1.1772578022670108e-1, 2.6127233757281593e-1, 2.0906779056580044e-4),
            Orbit::D(1.2405938140826056e-1, 3.4696498716590785e-1, 2.2601259917234113e-4),
            Orbit::D(1.2854673415085169e-1, 4.3176346681111472e-1, 2.3832654710013106e-4),
            Orbit::D(1.3163072351266547e-1, 5.1408239111942378e-1, 2.4690026557573305e-4),
            Orbit::D(1.3356870014103772e-1, 5.9257892508363796e-1, 2.5232383654210088e-4),
            Orbit::D(1.3450503431717897e-1, 6.6609609981039730e-1, 2.5495240850274581e-4),
            Orbit::D(1.4136613742530962e-1, 2.1217441744815146e-1, 2.0074309569918656e-4),
            Orbit::D(1.5081684561926992e-1, 2.9843329902061883e-1, 2.1938204095104543e-4),
            Orbit::D(1.5752720582591753e-1, 3.8451535663196562e-1, 2.3326550086895289e-4),
            Orbit::D(1.6223189316560335e-1, 4.6874138422508221e-1, 2.4324766750195815e-4),
            Orbit::D(1.6535564863587041e-1, 5.4969778338629827e-1, 2.4996575742658537e-4),
            Orbit::D(1.6714444028964665e-1, 6.2616585238596711e-1, 2.5383992602528196e-4),
            Orbit::D(1.7487682142588809e-1, 2.4796694434081462e-1, 2.1265681253947847e-4),
            Orbit::D(1.8448018921777273e-1, 3.3517865846633332e-1, 2.2788708276619163e-4),
            Orbit::D(1.9128451635254132e-1, 4.2116000334032155e-1, 2.3916996815324522e-4),
            Orbit::D(1.9595811538364530e-1, 5.0442742370602833e-1, 2.4711222237506505e-4),
            Orbit::D(1.9889317241265073e-1, 5.8370473065127282e-1, 2.5216761684860727e-4),
            Orbit::D(2.0031063821560760e-1, 6.5788111266693317e-1, 2.5462559272680624e-4),
            Orbit::D(2.0892164066120728e-1, 2.8376004522941123e-1, 2.2243946033721190e-4),
            Orbit::D(2.1841452360875982e-1, 3.7135055222091201e-1, 2.3482831922821162e-4),
            Orbit::D(2.2507101778581712e-1, 4.5678678343298823e-1, 2.4388015282739080e-4),
            Orbit::D(2.2948880811838371e-1, 5.3873540779257267e-1, 2.5002917524868517e-4),
            Orbit::D(2.3201745814389485e-1, 6.1603495669268804e-1, 2.5359356626453351e-4),
            Orbit::D(2.4319876855459716e-1, 3.1933449331939828e-1, 2.3042645226731398e-4),
            Orbit::D(2.5235906414862286e-1, 4.0679810989546622e-1, 2.4041397555814957e-4),
            Orbit::D(2.5865213034409101e-1, 4.9128293192320610e-1, 2.4753705042606375e-4),
            Orbit::D(2.6260311527139452e-1, 5.7157688983561050e-1, 2.5210559427647175e-4),
            Orbit::D(2.6451065621686692e-1, 6.4661853532094371e-1, 2.5433567433632241e-4),
            Orbit::D(2.7744970543777686e-1, 3.5449354424387441e-1, 2.3688542884241161e-4),
            Orbit::D(2.8608129769013735e-1, 4.4137699936875346e-1, 2.4482274077607406e-4),
            Orbit::D(2.9181122428654066e-1, 5.2453647933038117e-1, 2.5027072356405565e-4),
            Orbit::D(2.9509040752867133e-1, 6.0286272001361119e-1, 2.5344727855755367e-4),
            Orbit::D(3.1144603561569145e-1, 3.8905719322881527e-1, 2.4203520894617938e-4),
            Orbit::D(3.1936867578089961e-1, 4.7494871825163942e-1, 2.4821104555925605e-4),
            Orbit::D(3.2434392390678896e-1, 5.5643697889157562e-1, 2.5220317010542226e-4),
            Orbit::D(3.2674584511132859e-1, 6.3250398126534635e-1, 2.5415997130800902e-4),
            Orbit::D(3.4498068519130126e-1, 4.2285812142590912e-1, 2.4605971130812793e-4),
            Orbit::D(3.5202269495476030e-1, 5.0737981050754266e-1, 2.5071923977741060e-4),
            Orbit::D(3.5605367878353511e-1, 5.8687576977752876e-1, 2.5345112699787860e-4),
            Orbit::D(3.7786186412482564e-1, 4.5573872113040531e-1, 2.4911819122577344e-4),
            Orbit::D(3.8385443956678905e-1, 5.3854104488786536e-1, 2.5247659685348787e-4),
            Orbit::D(3.8674808212425815e-1, 6.1574588535196173e-1, 2.5412849149551682e-4),
            Orbit::D(4.0990863916989767e-1, 4.8754879505416426e-1, 2.5135281942058313e-4),
            Orbit::D(4.1468100376409628e-1, 5.6830653536705300e-1, 2.5360523885394168e-4),
            Orbit::D(4.4094749258539728e-1, 5.1814365299629972e-1, 2.5289430966932212e-4),
            Orbit::D(4.4432240946811213e-1, 5.9655276206635099e-1, 2.5422305880330644e-4),
            Orbit::D(4.7080945177112909e-1, 5.4738240956006623e-1, 2.5386603684881382e-4),
            Orbit::D(4.9932751403546372e-1, 5.7512633989761741e-1, 2.5438686482990273e-4),
        ],
    },
    LebedevRule {
        npoints: 4802,
        order: 119,
        orbits: &[
            Orbit::A1(9.6875218794202343e-5),
            Orbit::A2(2.3078978953678419e-4),
            Orbit::A3(2.2973108524984990e-4),
            Orbit::B(2.3357286088870645e-2, 7.3862659440027519e-5),
            Orbit::B(4.3529878365506536e-2, 8.2579776985413519e-5),
            Orbit::B(6.4392005210888004e-2, 9.7060447620579622e-5),
            Orbit::B(9.0039436319931818e-2, 1.3023938471170033e-4),
            Orbit::B(1.1967066155484733e-1, 1.5419570046010172e-4),
            Orbit::B(1.5117154128381344e-1, 1.7044597700921043e-4),
            Orbit::B(1.8359828285038010e-1, 1.8273748909429830e-4),
            Orbit::B(2.1650812591554056e-1, 1.9263608174361453e-4),
            Orbit::B(2.4962087204175631e-1, 2.0080102394947854e-4),
            Orbit::B(2.8272006735679001e-1, 2.0756359832092269e-4),
            Orbit::B(3.1561908239943465e-1, 2.1313066386909198e-4),
            Orbit::B(3.4814767937491153e-1, 2.1765623299373389e-4),
            Orbit::B(3.8014660869472267e-1, 2.2126822629910575e-4),
            Orbit::B(4.1146521196340113e-1, 2.2407995156685702e-4),
            Orbit::B(4.4195987865197522e-1, 2.2619598161875603e-4),
            Orbit::B(4.7149259493295437e-1, 2.2771563688088719e-4),
            Orbit::B(4.9992939728794666e-1, 2.2873517721283532e-4),
            Orbit::B(5.2713872214312496e-1, 2.2934908140841284e-4),
            Orbit::B(5.5298967808377619e-1, 2.2965053123762052e-4),
            Orbit::B(6.0008560994817128e-1, 2.2967938323188069e-4),
            Orbit::B(6.2105621927851762e-1, 2.2957854438430058e-4),
            Orbit::B(6.4011658799342408e-1, 2.2950179315291369e-4),
            Orbit::B(6.5711440292443346e-1, 2.2950596381848576e-4),
            Orbit::B(6.7189108217188642e-1, 2.2962323432373355e-4),
            Orbit::B(6.8428455910990116e-1, 2.2985301787407917e-4),
            Orbit::B(6.9413534762698170e-1, 2.3015797902805279e-4),
            Orbit::B(7.0129652422129918e-1, 2.3046904049964879e-4),
            Orbit::B(7.0564714282426455e-1, 2.3070279959071379e-4),
            Orbit::C(4.5955576435858951e-2, 9.3122746966702204e-5),
            Orbit::C(1.0493167424350230e-1, 1.1999193858769527e-4),
            Orbit::C(1.7735488795492740e-1, 1.5980391388777050e-4),
            Orbit::C(2.5590714112361268e-1, 1.8222537635749001e-4),
            Orbit::C(3.3581568379858978e-1, 1.9885795936550518e-4),
            Orbit::C(4.1558357437638932e-1, 2.1126201025333877e-4),
            Orbit::C(4.9378942961674716e-1, 2.2015948876990686e-4),
            Orbit::C(5.6915696947933159e-1, 2.2616225908950061e-4),
            Orbit::C(6.4058408548942514e-1, 2.2964584534357349e-4),
            Orbit::D(2.1778440814860450e-2, 7.3451338941432728e-2, 1.0060069902670339e-4),
            Orbit::D(2.4354365103728060e-2, 1.3883263564177539e-1, 1.4382047213590325e-4),
            Orbit::D(2.6812257554444906e-2, 2.1562702847857659e-1, 1.7224344887369614e-4),
            Orbit::D(2.8674995387504405e-2, 2.9516765080648605e-1, 1.9126282015298541e-4),
            Orbit::D(2.9971450981844790e-2, 3.7526522736927187e-1, 2.0560738398525279e-4),
            Orbit::D(3.0889704050602679e-2, 4.5447962749179410e-1, 2.1612815898798741e-4),
            Orbit::D(3.1525088115153498e-2, 5.3145747165856894e-1, 2.2349273564660033e-4),
            Orbit::D(3.1925383384961079e-2, 6.0501849860057055e-1, 2.2818938550656486e-4),
            Orbit::D(3.2118531962732462e-2, 6.7413544295722749e-1, 2.3048319132271475e-4),
            Orbit::D(4.5903621857751861e-2, 1.0098598340449305e-1, 1.2276766896358575e-4),
            Orbit::D(5.1188970573426480e-2, 1.7436869005372424e-1, 1.6077380254952547e-4),
            Orbit::D(5.5574957478056138e-2, 2.5323850549097093e-1, 1.8302374214550704e-4),
            Orbit::D(5.8678793419035112e-2, 3.3350854854727258e-1, 1.9924996722386841e-4),
            Orbit::D(6.0867258986780103e-2, 4.1353838793440273e-1, 2.1142358658318437e-4),
            Orbit::D(6.2409476776369245e-2, 4.9193890721466349e-1, 2.2019804773950051e-4),
            Orbit::D(6.3438652914654933e-2, 5.6746149322981854e-1, 2.2612880129852398e-4),
            Orbit::D(6.4028243539622470e-2, 6.3901635508804011e-1, 2.2957204448406871e-4),
            Orbit::D(7.2550630956908613e-2, 1.3242896197487553e-1, 1.4678642802701272e-4),
            Orbit::D(8.0146950485396343e-2, 2.0997370379502681e-1, 1.7414838535283758e-4),
            Orbit::D(8.5693680629502458e-2, 2.9025646177715364e-1, 1.9238553499976221e-4),
            Orbit::D(8.9610992050222896e-2, 3.7095617606363834e-1, 2.0612755334540052e-4),
            Orbit::D(9.2388495484356417e-2, 4.5061138851539062e-1, 2.1631756297706221e-4),
            Orbit::D(9.4307061442803528e-2, 5.2793130269851840e-1, 2.2349520665931771e-4),
            Orbit::D(9.5515035042239002e-2, 6.0177060049702658e-1, 2.2808181609237070e-4),
            Orbit::D(9.6098050770029059e-2, 6.7111991070884502e-1, 2.3032276490267143e-4),
            Orbit::D(1.0178254519606848e-1, 1.6542721096071281e-1, 1.6441789121011995e-4),
            Orbit::D(1.1051178741556994e-1, 2.4544925909085491e-1, 1.8519184675191503e-4),
            Orbit::D(1.1673674503241351e-1, 3.2669798231432562e-1, 2.0040678619362960e-4),
            Orbit::D(1.2116279276262976e-1, 4.0747228616674996e-1, 2.1193182159685988e-4),
            Orbit::D(1.2427866038518511e-1, 4.8644015546060726e-1, 2.2033921581116267e-4),
            Orbit::D(1.2635478187703744e-1, 5.6241699255711353e-1, 2.2605400985207944e-4),
            Orbit::D(1.2754400998011947e-1, 6.3434712702641805e-1, 2.2937732951802036e-4),
            Orbit::D(1.3256523209803628e-1, 1.9907671867764593e-1, 1.7776648907189739e-4),
            Orbit::D(1.4179505315709653e-1, 2.8072192578642774e-1, 1.9446286380706205e-4),
            Orbit::D(1.4838619940033043e-1, 3.6250396274936147e-1, 2.0718172973542502e-4),
            Orbit::D(1.5307489035548977e-1, 4.4299236488391164e-1, 2.1674165818826548e-4),
            Orbit::D(1.5630867314833863e-1, 5.2097080766117088e-1, 2.2354731768478724e-4),
            Orbit::D(1.5834307888225882e-1, 5.9534846270932762e-1, 2.2791579819001200e-4),
            Orbit::D(1.5932520376719572e-1, 6.6514945991278041e-1, 2.3005287673386147e-4),
            Orbit::D(1.6427653744967652e-1, 2.3301259455232787e-1, 1.8848256645166852e-4),
            Orbit::D(1.7366049457195976e-1, 3.1568422719758427e-1, 2.0224954462751414e-4),
            Orbit::D(1.8038215030114044e-1, 3.9758389375486980e-1, 2.1282508341021386e-4),
            Orbit::D(1.8511764367218769e-1, 4.7744280527217359e-1, 2.2064307305166226e-4),
            Orbit::D(1.8826965093885062e-1, 5.5414221358301230e-1, 2.2600241415011833e-4),
            Orbit::D(1.9007484625559876e-1, 6.2667307153391860e-1, 2.2912969185655670e-4),
            Orbit::D(1.9653603743378895e-1, 2.6700806111082875e-1, 1.9732692464538424e-4),
            Orbit::D(2.0584663246939811e-1, 3.5020909451777521e-1, 2.0874623824385059e-4),
            Orbit::D(2.1249629656664243e-1, 4.3183960990097747e-1, 2.1745137194401217e-4),
            Orbit::D(2.1708291076581790e-1, 5.1074465395359037e-1, 2.2371869386995227e-4),
            Orbit::D(2.1996729791260589e-1, 5.8588809151138166e-1, 2.2776759293292179e-4),
            Orbit::D(2.2135995195925701e-1, 6.5633632042788670e-1, 2.2975337525366348e-4),
            Orbit::D(2.2907267705422366e-1, 3.0087533762943142e-1, 2.0467677758552951e-4),
            Orbit::D(2.3812842611959192e-1, 3.8416848495196859e-1, 2.1410747548182977e-4),
            Orbit::D(2.4452218378059132e-1, 4.6517065557327431e-1, 2.2116618391502239e-4),
            Orbit::D(2.4877866890262704e-1, 5.4281513705429341e-1, 2.2604800750328349e-4),
            Orbit::D(2.5121654829248669e-1, 6.1613993906034437e-1, 2.2891021122847764e-4),
            Orbit::D(2.6166454953708229e-1, 3.3444755961678607e-1, 2.1076001259180270e-4),
            Orbit::D(2.7030312704225679e-1, 4.1743723679060146e-1, 2.1846409137481828e-4),
            Orbit::D(2.7627012243229865e-1, 4.9747526496209687e-1, 2.2406652578131045e-4),
            Orbit::D(2.8002399527950161e-1, 5.7356992925569628e-1, 2.2770988845585190e-4),
            Orbit::D(2.8183687018718878e-1, 6.4482964822550914e-1, 2.2950279546251408e-4),
            Orbit::D(2.9411507288431415e-1, 3.6757097240707859e-1, 2.1574163622668584e-4),
            Orbit::D(3.0218456830913076e-1, 4.4989264650118915e-1, 2.2193091652203056e-4),
            Orbit::D(3.0756277752113281e-1, 5.2865175796275166e-1, 2.2624395166326837e-4),
            Orbit::D(3.1064457028781184e-1, 6.0292537945628644e-1, 2.2878457151096878e-4),
            Orbit::D(3.2624404009190666e-1, 4.0010008875878122e-1, 2.1975578169206950e-4),
            Orbit::D(3.3359933551657200e-1, 4.8141462298077004e-1, 2.2461231183405812e-4),
            Orbit::D(3.3823110898268777e-1, 5.5860011957318956e-1, 2.2778745572318688e-4),
            Orbit::D(3.4046895008411943e-1, 6.3079989870731445e-1, 2.2935472682362844e-4),
            Orbit::D(3.5788353506119164e-1, 4.3189563504360279e-1, 2.2291926118354555e-4),
            Orbit::D(3.6438337355182321e-1, 5.1188636257347009e-1, 2.2660627669151396e-4),
            Orbit::D(3.6811088347413989e-1, 5.8722299020213198e-1, 2.2878543144550450e-4),
            Orbit::D(3.8887518540436772e-1, 4.6282390567955312e-1, 2.2533851102127757e-4),
            Orbit::D(3.9437895419581792e-1, 5.4119474551191438e-1, 2.2800729522307172e-4),
            Orbit::D(3.9703974468728387e-1, 6.1442586162351231e-1, 2.2932684996156429e-4),
            Orbit::D(4.1906780032228397e-1, 4.9275632297736360e-1, 2.2711371075487334e-4),
            Orbit::D(4.2343201444035417e-1, 5.6923015003572464e-1, 2.2890820252025377e-4),
            Orbit::D(4.4831518368838513e-1, 5.2156871367079682e-1, 2.2834140929175049e-4),
            Orbit::D(4.5138979474192598e-1, 5.9588572041395760e-1, 2.2940126951199655e-4),
            Orbit::D(4.7647406760878808e-1, 5.4914023469849049e-1, 2.2911616731300578e-4),
            Orbit::D(5.0340213109982768e-1, 5.7535201601260755e-1, 2.2953139085766499e-4),
        ],
    },
    LebedevRule {
        npoints: 5294,
        order: 125,
        orbits: &[
            Orbit::A1(9.0805107173293063e-5),
            Orbit::A3(2.0848243617918079e-4),
            Orbit::B(2.3032616902600223e-2, 5.0111056563762302e-5),
            Orbit::B(3.7572086244372492e-2, 5.9425204240204543e-5),
            Orbit::B(5.8219120369242115e-2, 9.5643948365247924e-5),
            Orbit::B(8.4031275177128162e-2, 1.1855306542317850e-4),
            Orbit::B(1.1229277966336985e-1, 1.3645101132961262e-4),
            Orbit::B(1.4201253180049900e-1, 1.5058288262913562e-4),
            Orbit::B(1.7263964364777074e-1, 1.6192987511736453e-4),
            Orbit::B(2.0381700575387834e-1, 1.7124505056271685e-4),
            Orbit::B(2.3528498925277655e-1, 1.7898910993269500e-4),
            Orbit::B(2.6683633541350404e-1, 1.8544749565160956e-4),
            Orbit::B(2.9829412798450716e-1, 1.9081486372920142e-4),
            Orbit::B(3.2950029221126809e-1, 1.9523774056760056e-4),
            Orbit::B(3.6030949184369254e-1, 1.9883492545030810e-4),
            Orbit::B(3.9058578952690054e-1, 2.0170798072522005e-4),
            Orbit::B(4.2020057582585341e-1, 2.0394730827067136e-4),
            Orbit::B(4.4903100616846442e-1, 2.0563602792172093e-4),
            Orbit::B(4.7695861603812906e-1, 2.0685258229445871e-4),
            Orbit::B(5.0386798870991578e-1, 2.0767248773768019e-4),
            Orbit::B(5.2964542865496123e-1, 2.0816942780574923e-4),
            Orbit::B(5.5417762071776300e-1, 2.0841576310268585e-4),
            Orbit::B(5.9904673219129057e-1, 2.0843815309354839e-4),
            Orbit::B(6.1914670962822638e-1, 2.0834762769438925e-4),
            Orbit::B(6.3752512128892291e-1, 2.0826861942867427e-4),
            Orbit::B(6.5405143811210764e-1, 2.0824756859581732e-4),
            Orbit::B(6.6858990643856020e-1, 2.0831398601631410e-4),
            Orbit::B(6.8100130096800893e-1, 2.0847455617419426e-4),
            Orbit::B(6.9114695787317848e-1, 2.0870913133309095e-4),
            Orbit::B(6.9889569151440023e-1, 2.0897184132959544e-4),
            Orbit::B(7.0413357948700572e-1, 2.0920033035112909e-4),
            Orbit::B(7.0677543980187518e-1, 2.0933361483123234e-4),
            Orbit::C(3.8403686937054607e-2, 7.5917081198360181e-5),
            Orbit::C(9.8354859827617130e-2, 1.0833839649824150e-4),
            Orbit::C(1.6657749473444880e-1, 1.4030193911320071e-4),
            Orbit::C(2.4057023345276485e-1, 1.6159701801231964e-4),
            Orbit::C(3.1652707701247035e-1, 1.7711441882877870e-4),
            Orbit::C(3.9273861458575415e-1, 1.8877600231647195e-4),
            Orbit::C(4.6788259185292225e-1, 1.9734746706529812e-4),
            Orbit::C(5.4080220243007904e-1, 2.0337876611086606e-4),
            Orbit::C(6.1049674457278580e-1, 2.0723436264858937e-4),
            Orbit::C(6.7609107026700377e-1, 2.0911778342681548e-4),
            Orbit::D(1.9365088694633752e-2, 6.6556441299613092e-2, 9.3166845472104703e-5),
            Orbit::D(2.2849703752179946e-2, 1.3054723871028401e-1, 1.2627151148252215e-4),
            Orbit::D(2.5202536176801196e-2, 2.0251525982659396e-1, 1.5213186096481117e-4),
            Orbit::D(2.6962712756798370e-2, 2.7784970159903888e-1, 1.7003452172377335e-4),
            Orbit::D(2.8238534791457947e-2, 3.5417975285656189e-1, 1.8343830159375782e-4),
            Orbit::D(2.9163999207059720e-2, 4.3006470364139071e-1, 1.9343744865412381e-4),
            Orbit::D(2.9825292038841000e-2, 5.0427110045281676e-1, 2.0065932753287604e-4),
            Orbit::D(3.0269917527084789e-2, 5.7572760409692336e-1, 2.0555493875622059e-4),
            Orbit::D(3.0526083576375717e-2, 6.4350196744024601e-1, 2.0839958675467307e-4),
            Orbit::D(4.2524419923594944e-2, 9.4462461710452292e-2, 1.1161936861521291e-4),
            Orbit::D(4.8122543381631806e-2, 1.6373279074625360e-1, 1.4143861256460768e-4),
            Orbit::D(5.2232545040096688e-2, 2.3810666525938901e-1, 1.6227727206940550e-4),
            Orbit::D(5.5234693155760420e-2, 3.1437335621706974e-1, 1.7749067807975024e-4),
            Orbit::D(5.7412963747518447e-2, 3.9082349722566279e-1, 1.8895405919977217e-4),
            Orbit::D(5.8988030252972799e-2, 4.6614863090819597e-1, 1.9741070103899958e-4),
            Orbit::D(6.0087280627593415e-2, 5.3921274568149602e-1, 2.0337284260129123e-4),
            Orbit::D(6.0784022979691030e-2, 6.0902658231246143e-1, 2.0718718502306082e-4),
            Orbit::D(6.1121857738567660e-2, 6.7472186763643205e-1, 2.0905097129223022e-4),
            Orbit::D(6.8065293082401793e-2, 1.2426519244258750e-1, 1.2986235486787292e-4),
            Orbit::D(7.5317344544184192e-2, 1.9727346332945836e-1, 1.5387404008224525e-4),
            Orbit::D(8.0606696859005678e-2, 2.7328233833062920e-1, 1.7104981402470918e-4),
            Orbit::D(8.4451932008180949e-2, 3.5014858103237090e-1, 1.8396593775506107e-4),
            Orbit::D(8.7246466341809673e-2, 4.2644084502723589e-1, 1.9366770236533119e-4),
            Orbit::D(8.9241626992683315e-2, 5.0096585553795903e-1, 2.0071292902694039e-4),
            Orbit::D(9.0582276749510110e-2, 5.7268194376831905e-1, 2.0550087812917851e-4),
            Orbit::D(9.1354599841398473e-2, 6.4067353443774999e-1, 2.0828566004275074e-4),
            Orbit::D(9.5609574832770133e-2, 1.5534380636122749e-1, 1.4502368318075498e-4),
            Orbit::D(1.0390436394671701e-1, 2.3086946525190541e-1, 1.6424349428855828e-4),
            Orbit::D(1.0993357538742191e-1, 3.0801376924862212e-1, 1.7859111502268379e-4),
            Orbit::D(1.1432631193344393e-1, 3.8514303224149615e-1, 1.8949874632954132e-4),
            Orbit::D(1.1750344230046376e-1, 4.6099496666793977e-1, 1.9761764950310522e-4),
            Orbit::D(1.1971851997112458e-1, 5.3448242705046667e-1, 2.0337369473616995e-4),
            Orbit::D(1.2112192358247961e-1, 6.0464692542158449e-1, 2.0706517834670192e-4),
            Orbit::D(1.2180241559495913e-1, 6.7063979277931385e-1, 2.0887058588272856e-4),
            Orbit::D(1.2459316567060932e-1, 1.8711371095998547e-1, 1.5727199588052749e-4),
            Orbit::D(1.3345265867604311e-1, 2.6438992179936166e-1, 1.7297906101048957e-4),
            Orbit::D(1.3991209558572129e-1, 3.4224056145800053e-1, 1.8501253142832002e-4),
            Orbit::D(1.4461778984077631e-1, 4.1930139795837668e-1, 1.9415488096045862e-4),
            Orbit::D(1.4797556527293618e-1, 4.9443894966298141e-1, 2.0085360044856313e-4),
            Orbit::D(1.5023007562187679e-1, 5.6665759974574248e-1, 2.0542871258146707e-4),
            Orbit::D(1.5152864047937933e-1, 6.3507161574462712e-1, 2.0809533350633766e-4),
            Orbit::D(1.5453858281875560e-1, 2.1926126282065317e-1, 1.6732347869816697e-4),
            Orbit::D(1.6364148687030960e-1, 2.9771715994502324e-1, 1.8035051910855990e-4),
            Orbit::D(1.7029778016462699e-1, 3.7588087739384907e-1, 1.9042297043281330e-4),
            Orbit::D(1.7511654385376868e-1, 4.5255859605615684e-1, 1.9800784272953651e-4),
            Orbit::D(1.7847406595759296e-1, 5.2671948844212091e-1, 2.0342803516264937e-4),
            Orbit::D(1.8060041919478922e-1, 5.9744574714407295e-1, 2.0691849367496218e-4),
            Orbit::D(1.8163146812454942e-1, 6.6391776791968127e-1, 2.0862849989594434e-4),
            Orbit::D(1.8510042493189210e-1, 2.5156828068230086e-1, 1.7568601198443185e-4),
            Orbit::D(1.9421954060604985e-1, 3.3072939029718440e-1, 1.8654753507244307e-4),
            Orbit::D(2.0087992566641436e-1, 4.0884583835134714e-1, 1.9492599563490168e-4),
            Orbit::D(2.0563383068536986e-1, 4.8484477797173620e-1, 2.0112962847236923e-4),
            Orbit::D(2.0882457005013788e-1, 5.5777878102866674e-1, 2.0539444659426623e-4),
            Orbit::D(2.1066217648008195e-1, 6.2679844441481747e-1, 2.0788836897458931e-4),
            Orbit::D(2.1601826080403741e-1, 2.8385358660811888e-1, 1.8267762913660562e-4),
            Orbit::D(2.2497528799382932e-1, 3.6330691982300173e-1, 1.9171826701219456e-4),
            Orbit::D(2.3147030522782688e-1, 4.4104505509298952e-1, 1.9861615454684506e-4),
            Orbit::D(2.3599654873262316e-1, 5.1608712083655850e-1, 2.0358884569101254e-4),
            Orbit::D(2.3886281366175149e-1, 5.8755637635940672e-1, 2.0680776427967098e-4),
            Orbit::D(2.4025269326768520e-1, 6.5466647135949352e-1, 2.0838863660455292e-4),
            Orbit::D(2.4707990121824733e-1, 3.1595788174471823e-1, 1.8851163486747241e-4),
            Orbit::D(2.5572188218799524e-1, 3.9533469559797063e-1, 1.9598517093032437e-4),
            Orbit::D(2.6189721114814729e-1, 4.7238794206574053e-1, 2.0157905856619699e-4),
            Orbit::D(2.6604302232160343e-1, 5.4621121857783961e-1, 2.0545163252725661e-4),
            Orbit::D(2.6843089287984356e-1, 6.1599100164349629e-1, 2.0772509495678283e-4),
            Orbit::D(2.7810142089888301e-1, 3.4773708827951028e-1, 1.9334578606254913e-4),
            Orbit::D(2.8628979253061337e-1, 4.2670183942700207e-1, 1.9945295482533178e-4),
            Orbit::D(2.9200131956968434e-1, 5.0278435619705630e-1, 2.0389341986705824e-4),
            Orbit::D(2.9561936645545583e-1, 5.7514250681700341e-1, 2.0678310329934056e-4),
            Orbit::D(2.9737407619819245e-1, 6.4302196029783043e-1, 2.0820624405961719e-4),
            Orbit::D(3.0891725235779594e-1, 3.7905769609488316e-1, 1.9730606721731595e-4),
            Orbit::D(3.1652245367379972e-1, 4.5730096226699951e-1, 2.0221389111843986e-4),
            Orbit::D(3.2163225552703811e-1, 5.3214536745399554e-1, 2.0563340604594254e-4),
            Orbit::D(3.2457639053544179e-1, 6.0280738729008987e-1, 2.0764853201654299e-4),
            Orbit::D(3.3937500555639222e-1, 4.0979383178987955e-1, 2.0049870997481962e-4),
            Orbit::D(3.4627302217310441e-1, 4.8702795599540222e-1, 2.0435180241753042e-4),
            Orbit::D(3.5064566159966815e-1, 5.6038391139036881e-1, 2.0687059593499011e-4),
            Orbit::D(3.5276700262414906e-1, 6.2913382752983527e-1, 2.0811414393861365e-4),
            Orbit::D(3.6933224710866730e-1, 4.3982565729588924e-1, 2.0301709093108701e-4),
            Orbit::D(3.7540168703628651e-1, 5.1578195815361194e-1, 2.0594503129316586e-4),
            Orbit::D(3.7890071813550485e-1, 5.8741507069197318e-1, 2.0767539059660770e-4),
            Orbit::D(3.9865410057017220e-1, 4.6903841148130704e-1, 2.0494614600728687e-4),
            Orbit::D(4.0377337850573614e-1, 5.4346516665302680e-1, 2.0706857151916061e-4),
            Orbit::D(4.0625801706131615e-1, 6.1315593816758707e-1, 2.0811793915741282e-4),
            Orbit::D(4.2721124914855835e-1, 4.9732160483801352e-1, 2.0636535650982236e-4),
            Orbit::D(4.3125577841883966e-1, 5.6998238878036422e-1, 2.0779553105379237e-4),
            Orbit::D(4.5487817353694610e-1, 5.2456815261897360e-1, 2.0735079272386132e-4),
            Orbit::D(4.5771753671604765e-1, 5.9524033509599517e-1, 2.0819803876488693e-4),
            Orbit::D(4.8153153550660216e-1, 5.5067339118373115e-1, 2.0797645930861321e-4),
            Orbit::D(5.0704864458306831e-1, 5.7553398295332858e-1, 2.0831505347824542e-4),
        ],
    },
    LebedevRule {
        npoints: 5810,
        order: 131,
        orbits: &[
            Orbit::A1(9.7353479461136352e-6),
            Orbit::A2(1.9075812418032698e-4),
            Orbit::A3(1.9010595467376098e-4),
            Orbit::B(1.1823616624002772e-2, 3.9264245389221172e-5),
            Orbit::B(3.0621450091389588e-2, 6.6679054672942744e-5),
            Orbit::B(5.3297940368342435e-2, 8.8688913150194228e-5),
            Orbit::B(7.8481655328622210e-2, 1.0663060009588771e-4),
            Orbit::B(1.0540381576362011e-1, 1.2145067433361435e-4),
            Orbit::B(1.3355777977662109e-1, 1.3380546816408570e-4),
            Orbit::B(1.6257699555022523e-1, 1.4416770236284232e-4),
            Orbit::B(1.9217871934127925e-1, 1.5288802008264643e-4),
            Orbit::B(2.2213405346905485e-1, 1.6023306237736070e-4),
            Orbit::B(2.5225049127911320e-1, 1.6641026534454002e-4),
            Orbit::B(2.8236108606796978e-1, 1.7158458540113191e-4),
            Orbit::B(3.1231739662675606e-1, 1.7589010001330842e-4),
            Orbit::B(3.4198470369537898e-1, 1.7943824852566904e-4),
            Orbit::B(3.7123864569997583e-1, 1.8232381067574018e-4),
            Orbit::B(3.9996276498768291e-1, 1.8462932529599152e-4),
            Orbit::B(4.2804664586480939e-1, 1.8642840793231131e-4),
            Orbit::B(4.5538443601857115e-1, 1.8778826946268972e-4),
            Orbit::B(4.8187360944378343e-1, 1.8877163218519819e-4),
            Orbit::B(5.0741387092606305e-1, 1.8943816381756566e-4),
            Orbit::B(5.3190613045707080e-1, 1.8984548995336343e-4),
            Orbit::B(5.5525149786772876e-1, 1.9004979295778480e-4),
            Orbit::B(5.9810090252461845e-1, 1.9006715019240732e-4),
            Orbit::B(6.1739901922281171e-1, 1.8998375555334744e-4),
            Orbit::B(6.3513652394111320e-1, 1.8990141131562441e-4),
            Orbit::B(6.5120102282272008e-1, 1.8985812577051143e-4),
            Orbit::B(6.6547583639481211e-1, 1.8988047560956501e-4),
            Orbit::B(6.7784104148533708e-1, 1.8997936104263994e-4),
            Orbit::B(6.8817608874841107e-1, 1.9014645548441367e-4),
            Orbit::B(6.9636452670945992e-1, 1.9035332462595783e-4),
            Orbit::B(7.0230106171535800e-1, 1.9055561584632039e-4),
            Orbit::B(7.0590046366287540e-1, 1.9070371556632995e-4),
            Orbit::C(3.5524703124725748e-2, 5.9929978442479925e-5),
            Orbit::C(9.1511766208412837e-2, 9.7490593824572580e-5),
            Orbit::C(1.5661979300689799e-1, 1.2416808045992168e-4),
            Orbit::C(2.2654675992719070e-1, 1.4376261542993086e-4),
            Orbit::C(2.9882423185813611e-1, 1.5842000547938761e-4),
            Orbit::C(3.7174824197038858e-1, 1.6944365509827508e-4),
            Orbit::C(4.4400944917588892e-1, 1.7766170140180951e-4),
            Orbit::C(5.1453370967566425e-1, 1.8361324344400834e-4),
            Orbit::C(5.8240536728602299e-1, 1.8764947270760282e-4),
            Orbit::C(6.4682839610433696e-1, 1.8999065353365272e-4),
            Orbit::D(1.7878282753429231e-2, 6.0959642591043466e-2, 8.1432528207673024e-5),
            Orbit::D(2.1364559226557986e-2, 1.2250394305883552e-1, 1.1233018290016507e-4),
            Orbit::D(2.3713115377819786e-2, 1.9053707909242948e-1, 1.3491059359373178e-4),
            Orbit::D(2.5400471863893506e-2, 2.6197338701194600e-1, 1.5173270374676634e-4),
            Orbit::D(2.6648419355374150e-2, 3.3481894798617723e-1, 1.6439088151527545e-4),
            Orbit::D(2.7577922908584643e-2, 4.0760512592571679e-1, 1.7389639265848653e-4),
            Orbit::D(2.8260941977359146e-2, 4.7915838346101303e-1, 1.8090650164587679e-4),
            Orbit::D(2.8742197559073573e-2, 5.4849335080284922e-1, 1.8585250414787888e-4),
            Orbit::D(2.9049576223415273e-2, 6.1475943905854880e-1, 1.8901256417317775e-4),
            Orbit::D(2.9199461358080946e-2, 6.7721357503953461e-1, 1.9055344987346367e-4),
            Orbit::D(3.9538887407920914e-2, 8.8119622709593767e-2, 9.9988598908881058e-5),
            Orbit::D(4.5209261661371972e-2, 1.5391132173213751e-1, 1.2536988267113002e-4),
            Orbit::D(4.9178780592548071e-2, 2.2425187177480099e-1, 1.4440600683693125e-4),
            Orbit::D(5.2081070185439886e-2, 2.9681497432379483e-1, 1.5877405574835595e-4),
            Orbit::D(5.4240000668434867e-2, 3.6995155458553042e-1, 1.6963003509077579e-4),
            Orbit::D(5.5841368349842914e-2, 4.4237881257915257e-1, 1.7774423598734693e-4),
            Orbit::D(5.6998713596836212e-2, 5.1303739527969372e-1, 1.8362971215967865e-4),
            Orbit::D(5.7783121237136900e-2, 5.8102076821421045e-1, 1.8762486900779376e-4),
            Orbit::D(5.8238091526172132e-2, 6.4553900263567798e-1, 1.8994346377957443e-4),
            Orbit::D(6.3781217977229951e-2, 1.1659367224288318e-1, 1.1561994030683605e-4),
            Orbit::D(7.0864681778648117e-2, 1.8562130986377104e-1, 1.3662661176784747e-4),
            Orbit::D(7.5954989604951451e-2, 2.5771908080259370e-1, 1.5267973909300109e-4),
            Orbit::D(7.9718284708855988e-2, 3.3104515048604888e-1, 1.6490933822740933e-4),
            Orbit::D(8.2519927154308614e-2, 4.0420030714746719e-1, 1.7415531038444373e-4),
            Orbit::D(8.4577720877271154e-2, 4.7604809173282625e-1, 1.8100108150686863e-4),
            Orbit::D(8.6027125285544015e-2, 5.4562524296284753e-1, 1.8584269162418766e-4),
            Orbit::D(8.6952623714395744e-2, 6.1209551971813503e-1, 1.8894044390645981e-4),
            Orbit::D(8.7403848998846831e-2, 6.7472585883654779e-1, 1.9045208568317648e-4),
            Orbit::D(8.9858908137450400e-2, 1.4602328570317855e-1, 1.2876320926354687e-4),
            Orbit::D(9.7852394887729108e-2, 2.1749987280351293e-1, 1.4627368561069716e-4),
            Orbit::D(1.0369910831911000e-1, 2.9087245349271867e-1, 1.5982087714064812e-4),
            Orbit::D(1.0804659991779263e-1, 3.6462155673766744e-1, 1.7019152161932725e-4),
            Orbit::D(1.1126951824837067e-1, 4.3753201001826253e-1, 1.7800152823861017e-4),
            Orbit::D(1.1359758463592555e-1, 5.0858387259462967e-1, 1.8369203182481798e-4),
            Orbit::D(1.1517481372212839e-1, 5.7689563296823876e-1, 1.8756541011346603e-4),
            Orbit::D(1.1608937670571666e-1, 6.4169442842943225e-1, 1.8981685392652757e-4),
            Orbit::D(1.1726065105761622e-1, 1.7611971101817556e-1, 1.3983786433651414e-4),
            Orbit::D(1.2581063962672101e-1, 2.4941283369383299e-1, 1.5450764666854376e-4),
            Orbit::D(1.3213485844502337e-1, 3.2363540200562185e-1, 1.6593543686153108e-4),
            Orbit::D(1.3684138493666292e-1, 3.9749167852793604e-1, 1.7468477531441123e-4),
            Orbit::D(1.4029641164678153e-1, 4.6990544903359432e-1, 1.8121167870771744e-4),
            Orbit::D(1.4272869047650574e-1, 5.3995136373912211e-1, 1.8584894732143575e-4),
            Orbit::D(1.4428116541363650e-1, 6.0681869446990477e-1, 1.8882407518335364e-4),
            Orbit::D(1.4503788267432463e-1, 6.6979263917312626e-1, 1.9027799406617598e-4),
            Orbit::D(1.4561028769709949e-1, 2.0664711904637187e-1, 1.4918764684175679e-4),
            Orbit::D(1.5445291250470020e-1, 2.8123215621434822e-1, 1.6150962808139882e-4),
            Orbit::D(1.6103165713147896e-1, 3.5592673593045443e-1, 1.7112799109463979e-4),
            Orbit::D(1.6590731847635592e-1, 4.2959674037720297e-1, 1.7845555120075453e-4),
            Orbit::D(1.6942751175842916e-1, 5.0127398794319489e-1, 1.8383231580853997e-4),
            Orbit::D(1.7181127400576404e-1, 5.7011184336363829e-1, 1.8750793424965505e-4),
            Orbit::D(1.7319303216576779e-1, 6.3536222480249127e-1, 1.8964973838669902e-4),
            Orbit::D(1.7461538230117765e-1, 2.3740760263281541e-1, 1.5708556791753614e-4),
            Orbit::D(1.8354335122027529e-1, 3.1283722764561112e-1, 1.6743666397417854e-4),
            Orbit::D(1.9019120803957068e-1, 3.8766371236769553e-1, 1.7549527256014290e-4),
            Orbit::D(1.9507037304546140e-1, 4.6087428544734471e-1, 1.8156875621121759e-4),
            Orbit::D(1.9850382353126900e-1, 5.3158748837549674e-1, 1.8591131198377497e-4),
            Orbit::D(2.0069448559853467e-1, 5.9902405306060302e-1, 1.8870802391022861e-4),
            Orbit::D(2.0176199587560589e-1, 6.6249270357318002e-1, 1.9007755302190686e-4),
            Orbit::D(2.0403830702955847e-1, 2.6823054743370517e-1, 1.6374839481037324e-4),
            Orbit::D(2.1288132586195840e-1, 3.4411451601779719e-1, 1.7242250024378789e-4),
            Orbit::D(2.1943849501379500e-1, 4.1876367052188418e-1, 1.7912478508025592e-4),
            Orbit::D(2.2417211443767240e-1, 4.9125988589499037e-1, 1.8408643706632616e-4),
            Orbit::D(2.2737656600208980e-1, 5.6079371096221209e-1, 1.8749692202216871e-4),
            Orbit::D(2.2923350905989046e-1, 6.2664526851396951e-1, 1.8949057521768425e-4),
            Orbit::D(2.3367886340036967e-1, 2.9896533121423680e-1, 1.6935005666328783e-4),
            Orbit::D(2.4229137348808291e-1, 3.7495677148535100e-1, 1.7658108229872958e-4),
            Orbit::D(2.4861553347638576e-1, 4.4914490198831070e-1, 1.8209543008777123e-4),
            Orbit::D(2.5306552554064887e-1, 5.2068827589455591e-1, 1.8606767853900460e-4),
            Orbit::D(2.5590414928497651e-1, 5.8883932234955216e-1, 1.8863756126810902e-4),
            Orbit::D(2.5728715123537188e-1, 6.5293209714159417e-1, 1.8989910612006791e-4),
            Orbit::D(2.6336327526542197e-1, 3.2947627527722090e-1, 1.7403227693935970e-4),
            Orbit::D(2.7161637483914530e-1, 4.0526217320156105e-1, 1.8001041260107988e-4),
            Orbit::D(2.7757689318123346e-1, 4.7872709324254453e-1, 1.8447885245484298e-4),
            Orbit::D(2.8161184097310660e-1, 5.4909409140198195e-1, 1.8756905837437270e-4),
            Orbit::D(2.8394972519768980e-1, 6.1567059791601686e-1, 1.8938195758092939e-4),
            Orbit::D(2.9293690980516002e-1, 3.5963908872760858e-1, 1.7791266372783058e-4),
            Orbit::D(3.0071276712402806e-1, 4.3493354535223849e-1, 1.8279604373313136e-4),
            Orbit::D(3.0618637865911208e-1, 5.0743151530555741e-1, 1.8634094817062194e-4),
            Orbit::D(3.0967805045932378e-1, 5.7641233020255433e-1, 1.8864532363471539e-4),
            Orbit::D(3.1137910605007046e-1, 6.4123388090781253e-1, 1.8977947482568365e-4),
            Orbit::D(3.2225927852755121e-1, 3.8933830463988123e-1, 1.8109081088353850e-4),
            Orbit::D(3.2944706772164795e-1, 4.6387766415249659e-1, 1.8501403007162762e-4),
            Orbit::D(3.3431447181525564e-1, 5.3518105077383360e-1, 1.8774330087950995e-4),
            Orbit::D(3.3713483663949867e-1, 6.0257860042135047e-1, 1.8935011233296617e-4),
            Orbit::D(3.5120047911957425e-1, 4.1846537893583463e-1, 1.8365291326002039e-4),
            Orbit::D(3.5769325436991545e-1, 4.9200464104626862e-1, 1.8673335073949625e-4),
            Orbit::D(3.6183627290284276e-1, 5.6190010259753820e-1, 1.8874445437052056e-4),
            Orbit::D(3.6385478276943961e-1, 6.2752919647949557e-1, 1.8973661845198437e-4),
            Orbit::D(3.7963856776845373e-1, 4.4691723190761662e-1, 1.8567528417773760e-4),
            Orbit::D(3.8533070597577634e-1, 5.1922735548617038e-1, 1.8801786886384148e-4),
            Orbit::D(3.8862975836204078e-1, 5.8751440352680473e-1, 1.8940098293749558e-4),
            Orbit::D(4.0745753782638783e-1, 4.7459508132769757e-1, 1.8722705666068302e-4),
            Orbit::D(4.1224250444526939e-1, 5.4546090811365233e-1, 1.8892789256547132e-4),
            Orbit::D(4.1457422777920316e-1, 6.1195073087344953e-1, 1.8976833450352077e-4),
            Orbit::D(4.3454569060278281e-1, 5.0140346014102621e-1, 1.8837226455912647e-4),
            Orbit::D(4.3831395877810275e-1, 5.7062206614241406e-1, 1.8952138325073527e-4),
            Orbit::D(4.6079425152051334e-1, 5.2724934045512384e-1, 1.8917143245252910e-4),
            Orbit::D(4.6343125363005522e-1, 5.9462867551815179e-1, 1.8985482773974365e-4),
            Orbit::D(4.8609612841817207e-1, 5.5204130518463657e-1, 1.8968274804501766e-4),
            Orbit::D(5.1034473953427895e-1, 5.7568872375030777e-1, 1.8996284170595050e-4),
        ],
    },
];
